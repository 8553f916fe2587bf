/// A single social-media post.
///
/// `record` holds the row exactly as loaded, aligned to [`Dataset::columns`].
/// `text` is the cleaned text used for analysis and is written back in place
/// of the text column on output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Zero-based row position in the combined dataset.
    pub id: usize,
    pub text: String,
    /// Origin-file identifier (`file` column, or the source file name).
    pub origin: String,
    pub record: Vec<String>,
}

impl Post {
    /// Row values ready for output, with the cleaned text substituted.
    #[must_use]
    pub fn output_record(&self, text_column: usize) -> Vec<&str> {
        self.record
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                if idx == text_column {
                    self.text.as_str()
                } else {
                    value.as_str()
                }
            })
            .collect()
    }
}

/// A combined table of posts with a shared column list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub columns: Vec<String>,
    pub text_column: usize,
    pub posts: Vec<Post>,
}

impl Dataset {
    /// Index of `name` in the column list.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// The value of `column` for `post`, or `None` when the column is unknown.
    #[must_use]
    pub fn value<'a>(&self, post: &'a Post, column: &str) -> Option<&'a str> {
        let idx = self.column_index(column)?;
        post.record.get(idx).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// A dataset with the same columns holding clones of `posts`.
    #[must_use]
    pub fn with_posts<'a, I>(&self, posts: I) -> Self
    where
        I: IntoIterator<Item = &'a Post>,
    {
        Self {
            columns: self.columns.clone(),
            text_column: self.text_column,
            posts: posts.into_iter().cloned().collect(),
        }
    }
}
