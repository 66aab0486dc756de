//! Built-in classification data
//!
//! The default extension lists, used when configuration does not supply its own.

use super::category::Category;

pub(crate) const DEFAULT_CATEGORIES: &[(Category, &[&str])] = &[
    (
        Category::Photo,
        &["jpg", "jpeg", "png", "bmp", "gif", "ico", "heic", "webp", "svg"],
    ),
    (Category::Music, &["mp3", "wav", "ogg", "flac", "ape"]),
    (
        Category::Document,
        &[
            "doc", "docx", "xls", "xlsx", "ppt", "pptx", "txt", "pdf", "md", "xmind",
        ],
    ),
    (
        Category::Compressed,
        &["zip", "rar", "gz", "7z", "jar", "war"],
    ),
    (
        Category::Video,
        &["mp4", "rmvb", "flv", "avi", "3gp", "wmv", "mov"],
    ),
    (
        Category::Application,
        &["exe", "msi", "app", "apk", "rpm", "deb"],
    ),
    (Category::Mirror, &["dmg", "img", "iso", "gho"]),
    (
        Category::Code,
        &[
            "java", "c", "b", "cpp", "h", "hpp", "py", "sh", "js", "css", "html", "json", "sql",
            "go", "php", "jsp", "asp", "aspx", "jspx", "class", "vbs", "bat", "shtml", "htm",
            // Verilog, VHDL, C#
            "v", "vhd", "cs",
        ],
    ),
    (
        Category::Configuration,
        &[
            "ini",
            "conf",
            "properties",
            "yml",
            "yaml",
            "xml",
            // IntelliJ module files
            "imi",
            "gitignore",
        ],
    ),
];
