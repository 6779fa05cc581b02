/// Static description of the application this installer manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub artifact_prefix: &'static str,
    pub artifact_extension: &'static str,
    pub desktop_file_name: &'static str,
    pub display_name: &'static str,
    pub comment: &'static str,
    pub launch_flag: &'static str,
    pub fallback_icon: &'static str,
    pub categories: &'static str,
    pub startup_wm_class: &'static str,
    pub mime_types: &'static str,
    pub keywords: &'static str,
    pub download_url: &'static str,
}

pub const CURSOR: Product = Product {
    name: "Cursor",
    artifact_prefix: "Cursor",
    artifact_extension: ".AppImage",
    desktop_file_name: "cursor-editor.desktop",
    display_name: "Cursor Editor",
    comment: "The IDE that helps you code faster",
    launch_flag: "--no-sandbox",
    fallback_icon: "cursor-editor",
    categories: "Development;IDE;",
    startup_wm_class: "Cursor",
    mime_types: "text/plain;inode/directory;",
    keywords: "cursor;editor;ide;",
    download_url: "https://www.cursor.com/",
};

impl Product {
    /// Whether `file_name` looks like one of this product's AppImages.
    ///
    /// Status detection and uninstall share this predicate so that anything
    /// reported as installed is also removed.
    pub fn matches_artifact(&self, file_name: &str) -> bool {
        file_name.starts_with(self.artifact_prefix)
            && file_name.ends_with(self.artifact_extension)
    }
}

impl Default for Product {
    fn default() -> Self {
        CURSOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Cursor-0.42.3-x86_64.AppImage", true)]
    #[case("Cursor.AppImage", true)]
    #[case("cursor-0.42.3-x86_64.AppImage", false)]
    #[case("Cursor-0.42.3-x86_64.AppImage.zsync", false)]
    #[case("Cursor-notes.txt", false)]
    #[case("Other.AppImage", false)]
    fn matches_artifact_requires_prefix_and_extension(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(CURSOR.matches_artifact(name), expected);
    }
}
