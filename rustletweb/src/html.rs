//! Static HTML content for the rustletweb servlets.
//!
//! Keeps the fixed page here as a constant, away from the servlet logic.
//!
/// Welcome page written by `WelcomeServlet`: eight newline-terminated
/// lines, no doctype
pub const WELCOME_PAGE: &str = r#"<html>
<head>
<title>Generic Servlet Example</title>
</head>
<body>
<h2>Welcome to the Generic Servlet Example</h2>
</body>
</html>
"#;
