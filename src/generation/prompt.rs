//! Prompt construction
//!
//! Each prompt states the exact JSON shape the parsers in `core` expect.

/// Which kind of output is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Article,
    SocialPost,
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptKind::Article => write!(f, "article"),
            PromptKind::SocialPost => write!(f, "social-post"),
        }
    }
}

/// A generation request with its inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    /// Turn learning notes into an article
    Article { learning_content: String },

    /// Derive a short post from an existing article
    SocialPost {
        title: String,
        summary: String,
        tags: Vec<String>,
    },
}

impl Prompt {
    pub fn article(learning_content: impl Into<String>) -> Self {
        Prompt::Article {
            learning_content: learning_content.into(),
        }
    }

    pub fn social_post(title: impl Into<String>, summary: impl Into<String>, tags: &[String]) -> Self {
        Prompt::SocialPost {
            title: title.into(),
            summary: summary.into(),
            tags: tags.to_vec(),
        }
    }

    pub fn kind(&self) -> PromptKind {
        match self {
            Prompt::Article { .. } => PromptKind::Article,
            Prompt::SocialPost { .. } => PromptKind::SocialPost,
        }
    }

    /// Full instruction text sent to the model
    pub fn render(&self) -> String {
        match self {
            Prompt::Article { learning_content } => article_instruction(learning_content),
            Prompt::SocialPost {
                title,
                summary,
                tags,
            } => social_instruction(title, summary, tags),
        }
    }
}

fn article_instruction(content: &str) -> String {
    format!(
        r#"
Turn these learning notes into a blog article:
{content}

Output JSON in exactly this shape:
{{
  "title": "Title",
  "summary": "Summary of about 100 characters",
  "htmlContent": "<div class='blog-content'>HTML body using h2, p, ul, ol, li, strong, em, code</div>",
  "tags": ["3-5 tags"],
  "metadata": {{"readingTime": minutes, "wordCount": words}}
}}

- Write in the first person, as your own experience
- Put code in <pre><code class="language-NAME"> blocks
"#
    )
}

fn social_instruction(title: &str, summary: &str, tags: &[String]) -> String {
    let tags = tags.join(", ");
    format!(
        r#"
Write a social media post likely to get attention, based on this blog article:

[Title]
{title}

[Summary]
{summary}

[Tags]
{tags}

[Requirements]
1. **Strictly 100 characters or fewer**
2. Open with a hook
3. Include 1-2 relevant hashtags (they count toward the limit)
4. A few emoji are fine (they count toward the limit)
5. Invite engagement

[Output format]
Return JSON with exactly this structure:
{{
  "content": "post text (100 characters or fewer)",
  "characterCount": actual character count
}}

Notes:
- **Never exceed 100 characters**
- Count the characters after writing and shorten if needed
"#
    )
}
