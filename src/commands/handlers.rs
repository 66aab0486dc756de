use crate::commands::parser::{Command, CommandResult};
use crate::digest::Digest;
use crate::error::FileStoreError;
use crate::storage::FileOutcome;
use crate::toolkit::FileToolkit;

use log::{info, warn};
use std::io::Write;

// Handle a single command, writing its output to `out`
pub fn handle_command(
    toolkit: &FileToolkit,
    command: Command,
    out: &mut dyn Write,
) -> Result<CommandResult, FileStoreError> {
    match command {
        Command::Type(file) => handle_cmd_type(toolkit, &file, out),
        Command::Ext(file) => handle_cmd_ext(&file, out),
        Command::Md5(path) => handle_cmd_md5(toolkit, &path, out),
        Command::Md5Str(text) => {
            writeln!(out, "{}", toolkit.digests.digest_of_string(&text))?;
            Ok(CommandResult::Done)
        }
        Command::Verify(path, digest) => handle_cmd_verify(toolkit, &path, &digest, out),
        Command::Norm(path) => {
            writeln!(out, "{}", toolkit.store.normalizer().normalize(&path))?;
            Ok(CommandResult::Done)
        }
        Command::Read(path) => handle_cmd_read(toolkit, &path, out),
        Command::Write(path, text) => {
            toolkit.store.write(&path, &text)?;
            Ok(CommandResult::Done)
        }
        Command::Delete(path) => report_outcome(toolkit.store.delete(&path), out),
        Command::Move(src, dest) => report_outcome(toolkit.store.move_file(&src, &dest), out),
        Command::Copy(src, dest) => report_outcome(toolkit.store.copy(&src, &dest), out),
        Command::Usage(usage) => Err(FileStoreError::Usage(usage.to_string())),
        Command::Unknown(cmd) => Err(FileStoreError::Usage(format!("unknown command: {}", cmd))),
    }
}

// Command handler for TYPE
fn handle_cmd_type(
    toolkit: &FileToolkit,
    file: &str,
    out: &mut dyn Write,
) -> Result<CommandResult, FileStoreError> {
    match toolkit.category_of(file) {
        Some(category) => {
            writeln!(out, "{}", category)?;
            Ok(CommandResult::Done)
        }
        None => {
            writeln!(out, "unclassified")?;
            Ok(CommandResult::NotFound)
        }
    }
}

// Command handler for EXT; an empty extension prints an empty line
fn handle_cmd_ext(file: &str, out: &mut dyn Write) -> Result<CommandResult, FileStoreError> {
    match crate::classify::extension_of(file) {
        Some(ext) => {
            writeln!(out, "{}", ext)?;
            Ok(CommandResult::Done)
        }
        None => {
            writeln!(out, "no extension")?;
            Ok(CommandResult::NotFound)
        }
    }
}

// Command handler for MD5
fn handle_cmd_md5(
    toolkit: &FileToolkit,
    path: &str,
    out: &mut dyn Write,
) -> Result<CommandResult, FileStoreError> {
    let physical = toolkit.store.normalizer().to_path(path);
    let digest = toolkit.digests.digest_of_file(&physical)?;
    writeln!(out, "{}  {}", digest, path)?;
    Ok(CommandResult::Done)
}

// Command handler for VERIFY
fn handle_cmd_verify(
    toolkit: &FileToolkit,
    path: &str,
    expected: &str,
    out: &mut dyn Write,
) -> Result<CommandResult, FileStoreError> {
    let expected = Digest::parse(expected)?;
    let physical = toolkit.store.normalizer().to_path(path);
    toolkit.digests.verify_file(&physical, &expected)?;
    info!("Verified {} against {}", path, expected);
    writeln!(out, "{}: OK", path)?;
    Ok(CommandResult::Done)
}

// Command handler for READ
fn handle_cmd_read(
    toolkit: &FileToolkit,
    path: &str,
    out: &mut dyn Write,
) -> Result<CommandResult, FileStoreError> {
    let result = toolkit.store.read_detailed(path);
    out.write_all(result.content.as_bytes())?;

    if let Some(e) = result.error {
        warn!("Read of {} stopped early: {}", path, e);
        return Ok(CommandResult::Failed);
    }
    if !result.found {
        return Ok(CommandResult::NotFound);
    }
    Ok(CommandResult::Done)
}

fn report_outcome(
    outcome: FileOutcome,
    out: &mut dyn Write,
) -> Result<CommandResult, FileStoreError> {
    match outcome {
        FileOutcome::Succeeded => {
            writeln!(out, "ok")?;
            Ok(CommandResult::Done)
        }
        FileOutcome::NotFound => {
            writeln!(out, "not found")?;
            Ok(CommandResult::NotFound)
        }
        FileOutcome::Failed(e) => {
            writeln!(out, "failed: {}", e)?;
            Ok(CommandResult::Failed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parser::parse_command;
    use crate::error::DigestError;

    fn run(toolkit: &FileToolkit, raw: &[&str]) -> (Result<CommandResult, FileStoreError>, String) {
        let args: Vec<String> = raw.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        let result = handle_command(toolkit, parse_command(&args), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_type_and_ext() {
        let toolkit = FileToolkit::default();

        let (result, out) = run(&toolkit, &["type", "photo.JPG"]);
        assert_eq!(result.unwrap(), CommandResult::Done);
        assert_eq!(out, "photo\n");

        let (result, out) = run(&toolkit, &["type", "noext"]);
        assert_eq!(result.unwrap(), CommandResult::NotFound);
        assert_eq!(out, "unclassified\n");

        let (_, out) = run(&toolkit, &["ext", "archive.tar.gz"]);
        assert_eq!(out, "gz\n");

        let (result, out) = run(&toolkit, &["ext", "trailing."]);
        assert_eq!(result.unwrap(), CommandResult::Done);
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_file_commands() {
        let dir = tempfile::tempdir().unwrap();
        let toolkit = FileToolkit::default();
        let src = format!("{}/a.txt", dir.path().to_string_lossy());
        let dest = format!("{}/b.txt", dir.path().to_string_lossy());

        let (result, _) = run(&toolkit, &["write", src.as_str(), "hello", "there"]);
        assert_eq!(result.unwrap(), CommandResult::Done);

        let (_, out) = run(&toolkit, &["read", src.as_str()]);
        assert_eq!(out, "hello there\n");

        let (_, out) = run(&toolkit, &["md5str", "hello", "there"]);
        let expected = toolkit.digests.digest_of_string("hello there");
        assert_eq!(out, format!("{}\n", expected));

        let (_, out) = run(&toolkit, &["md5", src.as_str()]);
        assert!(out.starts_with(expected.as_str()));

        let (result, out) = run(&toolkit, &["verify", src.as_str(), expected.as_str()]);
        assert_eq!(result.unwrap(), CommandResult::Done);
        assert!(out.ends_with(": OK\n"));

        let (result, out) = run(&toolkit, &["move", src.as_str(), dest.as_str()]);
        assert_eq!(result.unwrap(), CommandResult::Done);
        assert_eq!(out, "ok\n");

        let (result, out) = run(&toolkit, &["read", src.as_str()]);
        assert_eq!(result.unwrap(), CommandResult::NotFound);
        assert_eq!(out, "");

        let (result, out) = run(&toolkit, &["delete", src.as_str()]);
        assert_eq!(result.unwrap(), CommandResult::NotFound);
        assert_eq!(out, "not found\n");

        let (result, _) = run(&toolkit, &["copy", dest.as_str(), src.as_str()]);
        assert_eq!(result.unwrap(), CommandResult::Done);
        assert_eq!(toolkit.store.read(&src), toolkit.store.read(&dest));
    }

    #[test]
    fn test_verify_mismatch_and_bad_digest() {
        let dir = tempfile::tempdir().unwrap();
        let toolkit = FileToolkit::default();
        let path = format!("{}/v.txt", dir.path().to_string_lossy());
        toolkit.store.write(&path, "data").unwrap();

        let (result, _) = run(&toolkit, &["verify", path.as_str(), "d41d8cd98f00b204e9800998ecf8427e"]);
        assert!(matches!(
            result,
            Err(FileStoreError::Digest(DigestError::Mismatch { .. }))
        ));

        let (result, _) = run(&toolkit, &["verify", path.as_str(), "not-a-digest"]);
        assert!(matches!(
            result,
            Err(FileStoreError::Digest(DigestError::InvalidDigest(_)))
        ));
    }

    #[test]
    fn test_usage_errors() {
        let toolkit = FileToolkit::default();
        assert!(matches!(
            run(&toolkit, &["copy", "one"]).0,
            Err(FileStoreError::Usage(_))
        ));
        assert!(matches!(
            run(&toolkit, &["bogus"]).0,
            Err(FileStoreError::Usage(_))
        ));
    }
}
