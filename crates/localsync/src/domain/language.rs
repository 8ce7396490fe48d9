//! Extension lookups used when a file is opened without explicit content.

use std::fmt;

/// Starter text for script and component files.
pub const REACT_STARTER: &str = r#"import React from 'react';

function HelloWorld() {
  const [count, setCount] = React.useState(0);

  const handleClick = () => {
    setCount(count + 1);
  };

  return (
    <div className="container">
      <h1>Hello, LocalSync!</h1>
      <p>You clicked {count} times</p>
      <button onClick={handleClick}>
        Click me
      </button>
    </div>
  );
}

export default HelloWorld;"#;

/// Seeded body of the sample `server.js` file.
pub const NODE_STARTER: &str = r"const express = require('express');
const app = express();
const port = 3000;

app.use(express.json());

app.get('/api/hello', (req, res) => {
  res.json({ message: 'Hello from LocalSync API!' });
});

app.post('/api/data', (req, res) => {
  const { name } = req.body;
  res.json({ message: `Data received for ${name}` });
});

app.listen(port, () => {
  console.log(`Server running at http://localhost:${port}`);
});";

/// Starter text for stylesheets.
pub const CSS_STARTER: &str = r"/* Main styles */
.container {
  max-width: 800px;
  margin: 0 auto;
  padding: 20px;
  font-family: 'Arial', sans-serif;
}

h1 {
  color: #3b82f6;
  margin-bottom: 20px;
}

p {
  margin-bottom: 15px;
}

button {
  background-color: #3b82f6;
  color: white;
  border: none;
  padding: 8px 16px;
  border-radius: 4px;
  cursor: pointer;
  font-size: 14px;
}

button:hover {
  background-color: #2563eb;
}";

/// Display language derived from a file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    JavaScript,
    Css,
    Html,
    Json,
    Markdown,
    PlainText,
}

impl Language {
    /// Resolves the language of `file_name` from its lowercased extension.
    pub fn from_file_name(file_name: &str) -> Self {
        match extension(file_name).as_deref() {
            Some("js" | "jsx" | "ts" | "tsx") => Language::JavaScript,
            Some("css") => Language::Css,
            Some("html") => Language::Html,
            Some("json") => Language::Json,
            Some("md") => Language::Markdown,
            _ => Language::PlainText,
        }
    }

    /// Returns the canned text a new editor tab starts with.
    pub fn starter_content(self) -> &'static str {
        match self {
            Language::JavaScript => REACT_STARTER,
            Language::Css => CSS_STARTER,
            Language::Html | Language::Json | Language::Markdown | Language::PlainText => "",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Css => "css",
            Language::Html => "html",
            Language::Json => "json",
            Language::Markdown => "markdown",
            Language::PlainText => "plaintext",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the starter content for `file_name`.
pub fn default_content(file_name: &str) -> &'static str {
    Language::from_file_name(file_name).starter_content()
}

/// Text after the last `.`, lowercased. A name without a dot is its own
/// extension, which never matches a known language.
fn extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit('.')
        .next()
        .map(str::to_lowercase)
}
