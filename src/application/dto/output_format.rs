/// Output formats for the dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Console table with chart summaries
    Table,
    /// 12-column CSV export of the filtered view
    Csv,
    /// Print-ready Markdown report
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'table', 'csv' or 'markdown'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_str_table() {
        assert_eq!(OutputFormat::from_str("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("TABLE").unwrap(), OutputFormat::Table);
    }

    #[test]
    fn test_from_str_csv() {
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
    }

    #[test]
    fn test_from_str_markdown() {
        assert_eq!(
            OutputFormat::from_str("markdown").unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!(OutputFormat::from_str("md").unwrap(), OutputFormat::Markdown);
    }

    #[test]
    fn test_from_str_invalid() {
        let error = OutputFormat::from_str("xml").unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("csv"));
    }
}
