//! Path normalization
//!
//! Splits an arbitrary path string into a canonical directory part, a file
//! name and the combined resource path. Normalization never fails.

/// Separator between path segments in a resource tree.
pub const SEPARATOR: char = '/';

/// A path in canonical absolute form.
///
/// The resource path always starts with [`SEPARATOR`] and never contains two
/// separators in a row. A path ending in a separator has an empty file name
/// and denotes a directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    directory: String,
    file_name: String,
    resource_path: String,
}

impl Default for NormalizedPath {
    fn default() -> Self {
        normalize("")
    }
}

impl NormalizedPath {
    /// Everything up to and including the last separator.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// The final segment, empty for the root and trailing-slash paths.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// `directory + file_name`
    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    /// Returns true if the path ends with a separator.
    pub fn is_directory_form(&self) -> bool {
        self.file_name.is_empty()
    }

    /// Iterates the non-empty segments of the resource path.
    ///
    /// ```
    /// use module_resource::path::normalize;
    ///
    /// let path = normalize("/icons/app/logo.png");
    /// let segments: Vec<&str> = path.segments().collect();
    /// assert_eq!(segments, vec!["icons", "app", "logo.png"]);
    /// ```
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.resource_path
            .split(SEPARATOR)
            .filter(|segment| !segment.is_empty())
    }
}

/// Normalizes `input` into canonical absolute form.
///
/// The file name is taken after the last separator of the raw input, so only
/// the directory part is affected by separator collapsing.
///
/// ```
/// use module_resource::path::normalize;
///
/// let path = normalize("//a///b//");
/// assert_eq!(path.resource_path(), "/a/b/");
/// assert_eq!(path.file_name(), "");
///
/// let path = normalize("config.json");
/// assert_eq!(path.directory(), "/");
/// assert_eq!(path.resource_path(), "/config.json");
/// ```
pub fn normalize(input: &str) -> NormalizedPath {
    let mut file = String::with_capacity(input.len() + 1);
    if !input.starts_with(SEPARATOR) {
        file.push(SEPARATOR);
    }
    file.push_str(input);

    // `file` starts with a separator, so there is always one to find.
    let index = file.rfind(SEPARATOR).unwrap_or(0);

    let file_name = if index + 1 < file.len() {
        file[index + 1..].to_string()
    } else {
        String::new()
    };
    let directory = collapse_separators(&file[..=index]);

    let mut resource_path = String::with_capacity(directory.len() + file_name.len());
    resource_path.push_str(&directory);
    resource_path.push_str(&file_name);

    NormalizedPath {
        directory,
        file_name,
        resource_path,
    }
}

fn collapse_separators(raw: &str) -> String {
    let mut collapsed = String::with_capacity(raw.len());
    let mut last = None;
    for c in raw.chars() {
        if c == SEPARATOR && last == Some(SEPARATOR) {
            continue;
        }
        collapsed.push(c);
        last = Some(c);
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_root() {
        let path = normalize("");
        assert_eq!(path.resource_path(), "/");
        assert_eq!(path.directory(), "/");
        assert_eq!(path.file_name(), "");
        assert!(path.is_directory_form());
    }

    #[test]
    fn test_root_is_root() {
        assert_eq!(normalize("/"), normalize(""));
    }

    #[test]
    fn test_leading_separator_forced() {
        let path = normalize("docs/readme.md");
        assert_eq!(path.resource_path(), "/docs/readme.md");
        assert_eq!(path.directory(), "/docs/");
        assert_eq!(path.file_name(), "readme.md");
    }

    #[test]
    fn test_no_separator_is_file_under_root() {
        let path = normalize("README");
        assert_eq!(path.directory(), "/");
        assert_eq!(path.file_name(), "README");
        assert!(!path.is_directory_form());
    }

    #[test]
    fn test_duplicate_separators_collapse() {
        let path = normalize("//a///b//");
        assert_eq!(path.resource_path(), "/a/b/");
        assert_eq!(path.directory(), "/a/b/");
        assert!(path.is_directory_form());

        let path = normalize("a//b///c.txt");
        assert_eq!(path.resource_path(), "/a/b/c.txt");
        assert_eq!(path.file_name(), "c.txt");
    }

    #[test]
    fn test_only_separators() {
        let path = normalize("////");
        assert_eq!(path.resource_path(), "/");
        assert!(path.is_directory_form());
    }

    #[test]
    fn test_idempotent() {
        for input in ["", "/", "a", "/a/b/", "//x//y.z", "dir/", "a.b/c.d/e"] {
            let once = normalize(input);
            let twice = normalize(once.resource_path());
            assert_eq!(once, twice, "input {:?}", input);
        }
    }

    #[test]
    fn test_resource_path_is_directory_plus_name() {
        for input in ["", "/", "file", "/a//b", "///a/b/c/", "x/y/z.tar.gz"] {
            let path = normalize(input);
            assert_eq!(
                path.resource_path(),
                format!("{}{}", path.directory(), path.file_name())
            );
            assert!(path.resource_path().starts_with(SEPARATOR));
            assert!(!path.resource_path().contains("//"));
        }
    }

    #[test]
    fn test_segments() {
        let path = normalize("//a///b//");
        assert_eq!(path.segments().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(normalize("/").segments().count(), 0);
    }
}
