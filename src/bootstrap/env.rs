use crate::error::BoxError;

/// The page a [`Gate`] runs in.
///
/// Implemented by the embedder, e.g. a webview host or a test harness.
///
/// [`Gate`]: super::Gate
pub trait PageEnvironment {
    /// The raw `User-Agent` string of the browser, if available.
    fn user_agent(&self) -> Option<&str>;

    /// Navigate away from the current page, to the given url.
    fn navigate(&mut self, url: &str) -> Result<(), BoxError>;

    /// Append a stylesheet link, pointing to `href`, to the current page.
    fn inject_stylesheet(&mut self, href: &str) -> Result<(), BoxError>;
}

impl<T> PageEnvironment for &mut T
where
    T: PageEnvironment + ?Sized,
{
    fn user_agent(&self) -> Option<&str> {
        (**self).user_agent()
    }

    fn navigate(&mut self, url: &str) -> Result<(), BoxError> {
        (**self).navigate(url)
    }

    fn inject_stylesheet(&mut self, href: &str) -> Result<(), BoxError> {
        (**self).inject_stylesheet(href)
    }
}

impl<T> PageEnvironment for Box<T>
where
    T: PageEnvironment + ?Sized,
{
    fn user_agent(&self) -> Option<&str> {
        (**self).user_agent()
    }

    fn navigate(&mut self, url: &str) -> Result<(), BoxError> {
        (**self).navigate(url)
    }

    fn inject_stylesheet(&mut self, href: &str) -> Result<(), BoxError> {
        (**self).inject_stylesheet(href)
    }
}
