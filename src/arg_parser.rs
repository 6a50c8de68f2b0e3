use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum, Default)]
pub enum Format {
    /// Page-marked plain text (default)
    #[default]
    Text,
    /// One pretty-printed JSON object per document
    Json,
}

/// Extract the text of PDF files, page by page.
#[derive(Parser, Debug)]
#[command(name = "textquill")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// A PDF file, or a directory of PDF files
    pub path: PathBuf,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    pub format: Format,

    /// Search subdirectories when PATH is a directory
    #[arg(short = 'r', long, action = ArgAction::SetTrue)]
    pub recursive: bool,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["textquill", "Docs/file.pdf"]).unwrap();
        assert_eq!(args.path, PathBuf::from("Docs/file.pdf"));
        assert_eq!(args.format, Format::Text);
        assert!(args.output.is_none());
        assert!(!args.recursive);
        assert!(!args.debug);
    }

    #[test]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "textquill", "papers", "-r", "-f", "json", "-o", "out.json", "--debug",
        ])
        .unwrap();
        assert_eq!(args.format, Format::Json);
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert!(args.recursive);
        assert!(args.debug);
    }

    #[test]
    fn test_path_required() {
        assert!(Args::try_parse_from(["textquill"]).is_err());
        assert!(Args::try_parse_from(["textquill", "a.pdf", "-f", "xml"]).is_err());
    }
}
