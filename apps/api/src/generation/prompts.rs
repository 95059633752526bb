//! Prompt Builder — turns an optional category/topic into the fixed
//! system/user prompt pair sent to the generation endpoint.
//!
//! No other inputs affect the rendered text; given the same category, topic
//! and weekday the output is identical. Never fails.

use crate::generation::categories::{category_for_weekday, profile, FALLBACK_TOPIC_PHRASE};

/// System prompt describing the desired writing style and structure.
pub const SYSTEM_PROMPT: &str = "You are an expert technical writer specializing in software development. \
Write comprehensive, well-structured blog posts that are informative, engaging, and practical.\n\
Your posts should include:\n\
- Clear explanations with detailed context and background\n\
- Multiple code examples with detailed explanations and comments\n\
- Best practices and common pitfalls with solutions\n\
- Real-world applications and use cases with examples\n\
- Actionable insights, tips, and tricks\n\
- Step-by-step guides with screenshots descriptions\n\
- Performance considerations and optimization techniques\n\
- Security best practices when relevant\n\
- Troubleshooting guides for common issues\n\
- Comparison with alternatives when applicable\n\
- Future trends and considerations\n\n\
Format your response as a detailed blog post with proper HTML formatting using \
<h2>, <h3>, <p>, <ul>, <li>, <ol>, <pre><code>, <strong>, <em>, <blockquote> tags.\n\
Make the content comprehensive, detailed, and educational (2000-3500 words).";

/// User prompt template. Replace `{topic}` and `{category}` before sending.
/// The trailing block pins the exact three-field reply format the Response
/// Extractor parses.
pub const USER_PROMPT_TEMPLATE: &str = r#"Write a comprehensive, highly detailed blog post about {topic} in the {category} category.

The blog post must include:
1. An engaging, specific title (max 100 characters) that clearly indicates the topic
2. A compelling excerpt (4-5 sentences, max 300 characters) that summarizes all key points and benefits
3. Well-structured content with at least 8-10 major sections:
   - **Introduction**: Context, why this topic matters, what readers will learn (200-300 words)
   - **Understanding the Basics**: Core concepts, terminology, fundamentals explained in detail (300-400 words)
   - **Deep Dive**: Advanced concepts, how it works internally, technical details (400-500 words)
   - **Practical Examples**: Multiple real-world code examples with:
     * Complete, working code snippets
     * Detailed comments explaining each part
     * Different scenarios and use cases
     * Before/after comparisons (500-700 words)
   - **Best Practices**: Industry standards, recommended approaches, do's and don'ts (300-400 words)
   - **Common Mistakes**: Real mistakes developers make, why they happen, how to avoid them (300-400 words)
   - **Performance Optimization**: Tips for improving performance, benchmarks, optimization techniques (300-400 words)
   - **Real-World Use Cases**: Actual projects, case studies, when to use this approach (300-400 words)
   - **Troubleshooting**: Common issues, debugging tips, solutions to frequent problems (200-300 words)
   - **Conclusion**: Summary of key takeaways, next steps, additional resources (200-300 words)
4. Include at least 5-7 complete code examples with:
   * Full working code (not snippets)
   * Detailed inline comments
   * Explanation of what each part does
   * Expected output or results
5. Use proper HTML formatting:
   * <h2> for main sections
   * <h3> for subsections
   * <p> for paragraphs
   * <ul> and <ol> for lists
   * <pre><code> for code blocks with language specification
   * <strong> for emphasis
   * <em> for italics
   * <blockquote> for important notes
6. Include practical tips, tricks, and pro tips throughout
7. Cover both beginner-friendly explanations and advanced techniques
8. Add comparison tables or lists where relevant
9. Include "What to Remember" callout boxes
10. Make it actionable - readers should be able to implement immediately

Make the content extremely detailed, comprehensive, and educational. Aim for 2000-3500 words with substantial depth.
Every section should provide real value and actionable insights.

Return the response in this exact format:
TITLE: [title here]
EXCERPT: [excerpt here - 4-5 sentences]
CONTENT: [full detailed HTML formatted content here with all sections]"#;

/// A fully rendered prompt pair plus the category it was built for.
#[derive(Debug, Clone)]
pub struct BlogPrompt {
    pub category: String,
    pub topic: String,
    pub system: &'static str,
    pub user: String,
}

/// Builds the prompt pair for one generation run.
///
/// Absent category: deterministic weekday rotation over the closed set.
/// Absent topic: the chosen category's fixed phrase, or a generic phrase for
/// categories outside the known set.
pub fn build_prompt(category: Option<&str>, topic: Option<&str>, days_from_monday: u32) -> BlogPrompt {
    let category = match category {
        Some(name) => name.to_string(),
        None => category_for_weekday(days_from_monday).name.to_string(),
    };

    let topic = match topic {
        Some(text) => text.to_string(),
        None => profile(&category)
            .map(|p| p.topic_phrase)
            .unwrap_or(FALLBACK_TOPIC_PHRASE)
            .to_string(),
    };

    let user = USER_PROMPT_TEMPLATE
        .replace("{topic}", &topic)
        .replace("{category}", &category);

    BlogPrompt {
        category,
        topic,
        system: SYSTEM_PROMPT,
        user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_rotation_selects_documented_order() {
        assert_eq!(build_prompt(None, None, 0).category, "React");
        assert_eq!(build_prompt(None, None, 1).category, "Django");
        assert_eq!(build_prompt(None, None, 6).category, "Mobile");
        // Same weekday always picks the same category
        assert_eq!(
            build_prompt(None, None, 3).category,
            build_prompt(None, None, 3).category
        );
    }

    #[test]
    fn explicit_category_wins_over_rotation() {
        let prompt = build_prompt(Some("Python"), None, 0);
        assert_eq!(prompt.category, "Python");
        assert_eq!(
            prompt.topic,
            "Python programming, best practices, or Python libraries"
        );
    }

    #[test]
    fn unknown_category_falls_back_to_generic_topic() {
        let prompt = build_prompt(Some("Quantum"), None, 0);
        assert_eq!(prompt.category, "Quantum");
        assert_eq!(prompt.topic, FALLBACK_TOPIC_PHRASE);
    }

    #[test]
    fn explicit_topic_is_embedded_verbatim() {
        let prompt = build_prompt(Some("AWS"), Some("S3 lifecycle rules"), 2);
        assert_eq!(prompt.topic, "S3 lifecycle rules");
        assert!(prompt.user.contains("S3 lifecycle rules"));
        assert!(prompt.user.contains("in the AWS category"));
    }

    #[test]
    fn prompts_carry_the_full_section_guidance() {
        let prompt = build_prompt(None, None, 0);
        assert!(prompt
            .system
            .contains("Step-by-step guides with screenshots descriptions"));
        assert!(prompt.user.contains(
            "**Introduction**: Context, why this topic matters, what readers will learn (200-300 words)"
        ));
        assert!(prompt.user.contains("8. Add comparison tables or lists where relevant"));
        assert!(prompt.user.contains("9. Include \"What to Remember\" callout boxes"));
        assert!(prompt
            .user
            .contains("10. Make it actionable - readers should be able to implement immediately"));
    }

    #[test]
    fn user_prompt_pins_the_reply_format() {
        let prompt = build_prompt(None, None, 0);
        assert!(prompt.user.contains("TITLE:"));
        assert!(prompt.user.contains("EXCERPT:"));
        assert!(prompt.user.contains("CONTENT:"));
        assert!(!prompt.user.contains("{topic}"));
        assert!(!prompt.user.contains("{category}"));
    }
}
