#![deny(missing_docs)]

//! # Console Report
//!
//! The Arabic progress and summary lines printed during a run. Kept in one
//! place so the wording stays consistent with what the site maintainers
//! expect to see.

use std::path::Path;

use crate::error::CliError;

/// Closing line printed after the tally.
pub const ALL_PAGES_LINE: &str =
    "✅ جميع الصفحات تحتوي الآن على تأثيرات أيقونات التواصل الاجتماعي!";

/// One asset reference was inserted into a page.
pub fn asset_added(asset: &str, path: &Path) -> String {
    format!("✅ تم إضافة {} إلى {}", asset, path.display())
}

/// A page could not be read or written.
pub fn update_failed(path: &Path, error: &CliError) -> String {
    format!("❌ خطأ في تحديث {}: {}", path.display(), error)
}

/// A listed page has no file on disk.
pub fn missing_file(name: &str) -> String {
    format!("⚠️ الملف غير موجود: {}", name)
}

/// Final tally of pages processed without error out of pages found.
pub fn summary(updated: usize, total: usize) -> String {
    format!("🎉 تم تحديث {} من أصل {} ملف", updated, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_added_format() {
        let line = asset_added("hover-fix.css", Path::new("test.html"));
        assert_eq!(line, "✅ تم إضافة hover-fix.css إلى test.html");
    }

    #[test]
    fn test_update_failed_includes_error_text() {
        let error = CliError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied",
        ));
        let line = update_failed(Path::new("gallery.html"), &error);

        assert!(line.starts_with("❌ خطأ في تحديث gallery.html: "));
        assert!(line.contains("permission denied"));
    }

    #[test]
    fn test_missing_file_format() {
        let line = missing_file("nonexistent.html");
        assert_eq!(line, "⚠️ الملف غير موجود: nonexistent.html");
    }

    #[test]
    fn test_summary_format() {
        assert_eq!(summary(26, 27), "🎉 تم تحديث 26 من أصل 27 ملف");
        assert_eq!(summary(0, 0), "🎉 تم تحديث 0 من أصل 0 ملف");
    }

    #[test]
    fn test_report_lines_are_arabic() {
        // The console output is right-to-left Arabic text with emoji markers.
        let arabic = |s: &str| s.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c));

        assert!(arabic(ALL_PAGES_LINE));
        assert!(arabic(&asset_added("hover-fix.js", Path::new("shades.html"))));
        assert!(arabic(&missing_file("shades.html")));
        assert!(arabic(&summary(1, 2)));
        assert!(ALL_PAGES_LINE.starts_with('✅'));
    }
}
