// Command enum to represent operator commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Type(String),
    Ext(String),
    Md5(String),
    Md5Str(String),
    Verify(String, String),
    Norm(String),
    Read(String),
    Write(String, String),
    Delete(String),
    Move(String, String),
    Copy(String, String),
    /// Known command with wrong arguments; carries its usage line
    Usage(&'static str),
    Unknown(String),
}

#[derive(Debug, PartialEq)]
pub enum CommandResult {
    Done,
    NotFound,
    Failed,
}

impl CommandResult {
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandResult::Done => 0,
            CommandResult::NotFound | CommandResult::Failed => 1,
        }
    }
}

pub const USAGE: &str = "usage: netdisk-files <command> [args...]
  type <file>             category of a filename
  ext <file>              extension of a filename
  md5 <path>              digest of a file
  md5str <text...>        digest of a string
  verify <path> <digest>  check a file against a digest
  norm <path>             native form of a logical path
  read <path>             print a text file
  write <path> <text...>  replace a file's content
  delete <path>           remove a file
  move <src> <dest>       rename a file
  copy <src> <dest>       copy a file";

// Parse command-line arguments into Command enum
pub fn parse_command(args: &[String]) -> Command {
    let Some((cmd, rest)) = args.split_first() else {
        return Command::Usage(USAGE);
    };

    let one = |usage: &'static str, f: fn(String) -> Command| match rest {
        [a] => f(a.clone()),
        _ => Command::Usage(usage),
    };
    let two = |usage: &'static str, f: fn(String, String) -> Command| match rest {
        [a, b] => f(a.clone(), b.clone()),
        _ => Command::Usage(usage),
    };

    match cmd.to_ascii_lowercase().as_str() {
        "type" => one("type <file>", Command::Type),
        "ext" => one("ext <file>", Command::Ext),
        "md5" => one("md5 <path>", Command::Md5),
        "md5str" => Command::Md5Str(rest.join(" ")),
        "verify" => two("verify <path> <digest>", Command::Verify),
        "norm" => one("norm <path>", Command::Norm),
        "read" => one("read <path>", Command::Read),
        "write" => match rest.split_first() {
            Some((path, text)) => Command::Write(path.clone(), text.join(" ")),
            None => Command::Usage("write <path> <text...>"),
        },
        "delete" => one("delete <path>", Command::Delete),
        "move" => two("move <src> <dest>", Command::Move),
        "copy" => two("copy <src> <dest>", Command::Copy),
        _ => Command::Unknown(cmd.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_single_argument_commands() {
        assert_eq!(
            parse_command(&args(&["type", "a.png"])),
            Command::Type("a.png".to_string())
        );
        assert_eq!(
            parse_command(&args(&["EXT", "a.tar.gz"])),
            Command::Ext("a.tar.gz".to_string())
        );
        assert_eq!(
            parse_command(&args(&["Delete", "/tmp/x"])),
            Command::Delete("/tmp/x".to_string())
        );
    }

    #[test]
    fn test_parse_commands_with_two_args() {
        assert_eq!(
            parse_command(&args(&["move", "a", "b"])),
            Command::Move("a".to_string(), "b".to_string())
        );
        assert_eq!(
            parse_command(&args(&["copy", "a", "b"])),
            Command::Copy("a".to_string(), "b".to_string())
        );
        assert_eq!(
            parse_command(&args(&["verify", "f", "d41d8cd98f00b204e9800998ecf8427e"])),
            Command::Verify("f".to_string(), "d41d8cd98f00b204e9800998ecf8427e".to_string())
        );
    }

    #[test]
    fn test_parse_text_commands() {
        assert_eq!(
            parse_command(&args(&["write", "f.txt", "hello", "world"])),
            Command::Write("f.txt".to_string(), "hello world".to_string())
        );
        assert_eq!(
            parse_command(&args(&["write", "f.txt"])),
            Command::Write("f.txt".to_string(), String::new())
        );
        assert_eq!(parse_command(&args(&["md5str"])), Command::Md5Str(String::new()));
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(parse_command(&[]), Command::Usage(USAGE));
        assert_eq!(
            parse_command(&args(&["move", "only-one"])),
            Command::Usage("move <src> <dest>")
        );
        assert_eq!(
            parse_command(&args(&["read"])),
            Command::Usage("read <path>")
        );
        assert_eq!(
            parse_command(&args(&["write"])),
            Command::Usage("write <path> <text...>")
        );
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(
            parse_command(&args(&["frobnicate", "x"])),
            Command::Unknown("frobnicate".to_string())
        );
    }
}
