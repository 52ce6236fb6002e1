//! Source URL lookup in CocoaPods podspec documents.

use lazy_static::lazy_static;
use regex::Regex;

/// Field marker for the archive location declaration.
pub const SOURCE_FIELD: &str = "s.source";

lazy_static! {
    /// First double-quoted value on a line.
    static ref QUOTED_VALUE: Regex = Regex::new(r#""([^"]*)""#).unwrap();
}

/// Find the archive URL declared by a podspec.
///
/// Lines are matched after trimming leading whitespace. The first
/// `s.source` line carrying a non-empty quoted value wins and scanning
/// stops there.
pub fn find_source_url(podspec: &str) -> Option<String> {
    podspec
        .lines()
        .map(str::trim_start)
        .filter(|line| line.starts_with(SOURCE_FIELD))
        .find_map(extract_quoted)
}

fn extract_quoted(line: &str) -> Option<String> {
    let value = QUOTED_VALUE.captures(line)?.get(1)?.as_str();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PODSPEC: &str = r#"Pod::Spec.new do |s|
  s.name = 'DJI-SDK-iOS'
  s.version = '4.16.2'
  s.summary = 'DJI Mobile SDK for iOS'
  s.homepage = 'https://github.com/dji-sdk/Mobile-SDK-iOS'
  s.license = { :type => 'CUSTOM', :text => 'Copyright (c) DJI' }
  s.author = { 'DJI SDK' => 'dev@dji.com' }
  s.source = { :http => "https://terra-1-g.djicdn.com/sdk/iOS_Mobile_SDK_4.16.2.zip" }
  s.platform = :ios, '11.0'
  s.ios.vendored_frameworks = 'iOS_Mobile_SDK/DJISDK.framework'
end
"#;

    #[test]
    fn test_find_source_url() {
        assert_eq!(
            find_source_url(PODSPEC),
            Some("https://terra-1-g.djicdn.com/sdk/iOS_Mobile_SDK_4.16.2.zip".to_string())
        );
    }

    #[test]
    fn test_indented_source_line() {
        let podspec = "  s.source = { :http => \"https://example.test/sdk.zip\" }\n";
        assert_eq!(
            find_source_url(podspec),
            Some("https://example.test/sdk.zip".to_string())
        );
    }

    #[test]
    fn test_tab_indented_source_line() {
        let podspec = "\t\ts.source = { :http => \"https://example.test/tabbed.zip\" }";
        assert_eq!(
            find_source_url(podspec),
            Some("https://example.test/tabbed.zip".to_string())
        );
    }

    #[test]
    fn test_first_match_wins() {
        let podspec = r#"
s.source = { :http => "https://example.test/first.zip" }
s.source = { :http => "https://example.test/second.zip" }
"#;
        assert_eq!(
            find_source_url(podspec),
            Some("https://example.test/first.zip".to_string())
        );
    }

    #[test]
    fn test_unquoted_source_is_skipped() {
        let podspec = r#"
s.source = { :git => 'https://example.test/repo.git' }
s.source = { :http => "" }
s.source = { :http => "https://example.test/later.zip" }
"#;
        assert_eq!(
            find_source_url(podspec),
            Some("https://example.test/later.zip".to_string())
        );
    }

    #[test]
    fn test_marker_must_start_the_line() {
        let podspec = r#"
# s.source = { :http => "https://example.test/commented.zip" }
  x = s.source
"#;
        assert_eq!(find_source_url(podspec), None);
    }

    #[test]
    fn test_no_source_line() {
        let podspec = "Pod::Spec.new do |s|\n  s.name = \"DJI-SDK-iOS\"\nend\n";
        assert_eq!(find_source_url(podspec), None);
        assert_eq!(find_source_url(""), None);
    }
}
