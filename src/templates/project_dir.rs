    /// A directory containing copied files.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ProjectDir {
        path: &'static str,
    }

    impl ProjectDir {
        #[doc(hidden)]
        pub const fn new(path: &'static str) -> Self {
            Self { path }
        }

        /// The path this accessor names.
        pub const fn path(&self) -> &'static str {
            self.path
        }
    }

    impl std::fmt::Display for ProjectDir {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.path)
        }
    }

    impl AsRef<std::path::Path> for ProjectDir {
        fn as_ref(&self) -> &std::path::Path {
            std::path::Path::new(self.path)
        }
    }
