    /// A file copied alongside the compiled output.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ProjectFile {
        path: &'static str,
    }

    impl ProjectFile {
        #[doc(hidden)]
        pub const fn new(path: &'static str) -> Self {
            Self { path }
        }

        /// The path this accessor names.
        pub const fn path(&self) -> &'static str {
            self.path
        }
    }

    impl std::fmt::Display for ProjectFile {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.path)
        }
    }

    impl AsRef<std::path::Path> for ProjectFile {
        fn as_ref(&self) -> &std::path::Path {
            std::path::Path::new(self.path)
        }
    }
