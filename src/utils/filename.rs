use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Generate default output filename with format: isd-temperatures-{YYMMDD}.txt
pub fn generate_default_output_filename() -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("isd-temperatures-{:02}{:02}{:02}.txt", year, month, day);
    PathBuf::from("output").join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_output_filename() {
        let filename = generate_default_output_filename();
        let filename_str = filename.to_string_lossy();

        assert!(filename_str.contains("isd-temperatures-"));
        assert!(filename_str.ends_with(".txt"));
        assert!(filename_str.starts_with("output"));

        let parts: Vec<&str> = filename_str.split('/').collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], "output");

        let file_part = parts[1];
        assert!(file_part.starts_with("isd-temperatures-"));
        assert!(file_part.ends_with(".txt"));
    }
}
