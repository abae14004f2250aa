//! The book record.
//!
//! A plain value container for one catalog entry: identifier, title,
//! author, price. No validation and no derived state; accessors return the
//! last value stored and mutators overwrite unconditionally.
//!
use serde::{Deserialize, Serialize};

// docker run --name mysql-container -e MYSQL_ROOT_PASSWORD=my-secret-pw -p 3306:3306 -d mysql:latest

/// One book catalog entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    id: i32,
    title: Option<String>,
    author: Option<String>,
    price: f32,
}

impl Book {
    /// Empty record: id 0, no title or author, price 0.0
    pub fn new() -> Self {
        Self::default()
    }

    /// Record carrying only its identifier
    pub fn with_id(id: i32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Record without an identifier yet; every other constructor that
    /// takes field values funnels through this one
    pub fn without_id(title: &str, author: &str, price: f32) -> Self {
        Self {
            id: 0,
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            price,
        }
    }

    /// Fully specified record
    pub fn full(id: i32, title: &str, author: &str, price: f32) -> Self {
        let mut book = Self::without_id(title, author, price);
        book.id = id;
        book
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn set_author(&mut self, author: Option<String>) {
        self.author = author;
    }

    pub fn price(&self) -> f32 {
        self.price
    }

    pub fn set_price(&mut self, price: f32) {
        self.price = price;
    }
}
