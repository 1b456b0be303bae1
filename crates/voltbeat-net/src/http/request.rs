use core::fmt::Write;

/// HTTP request method.
#[derive(Debug, Copy, Clone)]
pub(crate) enum Method {
    Get,
    Post,
}

impl Method {
    /// Convert the method to a string.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// HTTP Content Type.
#[derive(Debug)]
pub(crate) enum ContentType {
    Json,
}

impl ContentType {
    /// Convert the content type to a string.
    pub(super) fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
        }
    }
}

/// HTTP socket connection policy.
#[derive(Debug)]
pub(crate) enum ConnectionPolicy {
    Close,
}

impl ConnectionPolicy {
    /// Convert the connection type to a string.
    pub(super) fn as_str(&self) -> &'static str {
        match self {
            ConnectionPolicy::Close => "close",
        }
    }
}

pub(crate) trait TargetWriter {
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error>;
}

/// HTTP Content Headers.
pub(crate) struct ContentHeaders {
    content_type: ContentType,
    content_length: Option<usize>,
}

impl ContentHeaders {
    /// Create new content headers with a content type.
    pub(crate) const fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            content_length: None,
        }
    }

    /// Set the content length.
    #[must_use]
    pub(crate) const fn with_length(mut self, length: usize) -> Self {
        self.content_length = Some(length);
        self
    }
}

impl TargetWriter for ContentHeaders {
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error> {
        write!(writer, "Content-Type: {}\r\n", self.content_type.as_str())?;
        if let Some(content_length) = self.content_length {
            write!(writer, "Content-Length: {}\r\n", content_length)?;
        }
        Ok(())
    }
}

/// Request heading: the request line plus headers.
pub(crate) struct RequestHeaders<'a> {
    method: Method,
    host: &'a str,
    path: &'a str,
    connection: ConnectionPolicy,
    content: Option<ContentHeaders>,
}

impl<'a> RequestHeaders<'a> {
    /// Create request headers for a method and target.
    pub(crate) const fn new(method: Method, host: &'a str, path: &'a str) -> Self {
        Self {
            method,
            host,
            path,
            connection: ConnectionPolicy::Close,
            content: None,
        }
    }

    /// Set the content headers.
    #[must_use]
    pub(crate) const fn with_content(mut self, content: ContentHeaders) -> Self {
        self.content = Some(content);
        self
    }
}

impl TargetWriter for RequestHeaders<'_> {
    /// Write the request headers to a writer.
    fn write_to(&self, writer: &mut impl Write) -> Result<(), core::fmt::Error> {
        write!(writer, "{} {} HTTP/1.1\r\n", self.method.as_str(), self.path)?;
        write!(writer, "Host: {}\r\n", self.host)?;
        write!(writer, "Connection: {}\r\n", self.connection.as_str())?;
        if let Some(content) = &self.content {
            content.write_to(writer)?;
        }
        write!(writer, "\r\n")?;
        Ok(())
    }
}
