    /// A composable path fragment; join fragments with the `/` operator.
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub struct PathNode(pub std::borrow::Cow<'static, str>);

    impl PathNode {
        /// The empty fragment, the identity element of `/`.
        pub const EMPTY: PathNode = PathNode::lit("");

        #[doc(hidden)]
        pub const fn lit(value: &'static str) -> Self {
            PathNode(std::borrow::Cow::Borrowed(value))
        }

        pub fn as_str(&self) -> &str {
            &self.0
        }
    }

    impl std::fmt::Display for PathNode {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl std::ops::Div for PathNode {
        type Output = PathNode;

        fn div(self, rhs: PathNode) -> PathNode {
            if self.0.is_empty() {
                rhs
            } else if rhs.0.is_empty() {
                self
            } else {
                PathNode(std::borrow::Cow::Owned(format!("{}/{}", self.0, rhs.0)))
            }
        }
    }

    impl std::ops::Div<&'static str> for PathNode {
        type Output = PathNode;

        fn div(self, rhs: &'static str) -> PathNode {
            self / PathNode::lit(rhs)
        }
    }
