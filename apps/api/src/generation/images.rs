//! Image Resolver — maps (title, category) to a deterministic Unsplash URL.
//!
//! Pure function of its inputs: the same title and category always yield the
//! same URL, in any process, so re-runs stay cache-friendly. No network call,
//! no failure mode.

use crate::generation::categories::{profile, CATEGORIES};

/// Query parameters are fixed for compatibility with already-stored URLs.
fn format_url(photo_id: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo_id}?w=800&h=400&fit=crop&q=80&auto=format")
}

/// FNV-1a 64-bit. Process-stable title hashing for candidate selection.
fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    bytes.iter().fold(OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(PRIME)
    })
}

/// Resolves the image URL for a post.
///
/// Unknown categories fall back to the first known category's candidates.
pub fn image_url(title: &str, category: &str) -> String {
    let index = (fnv1a64(title.as_bytes()) % 100) as usize;
    let photos = profile(category)
        .map(|p| p.photo_ids)
        .unwrap_or(CATEGORIES[0].photo_ids);
    format_url(photos[index % photos.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_inputs_always_yield_the_same_url() {
        let a = image_url("Mastering React Hooks", "React");
        let b = image_url("Mastering React Hooks", "React");
        assert_eq!(a, b);
    }

    #[test]
    fn url_carries_the_fixed_query_parameters() {
        let url = image_url("Some Post", "Django");
        assert!(url.starts_with("https://images.unsplash.com/photo-"));
        assert!(url.ends_with("?w=800&h=400&fit=crop&q=80&auto=format"));
    }

    #[test]
    fn candidate_comes_from_the_category_table() {
        let url = image_url("Some Post", "Python");
        let chosen = profile("Python")
            .unwrap()
            .photo_ids
            .iter()
            .any(|id| url.contains(id));
        assert!(chosen);
    }

    #[test]
    fn unknown_category_falls_back_to_default_candidates() {
        let url = image_url("Some Post", "Fortran");
        let fallback = CATEGORIES[0].photo_ids.iter().any(|id| url.contains(id));
        assert!(fallback);
    }

    #[test]
    fn different_titles_can_select_different_candidates() {
        let urls: std::collections::HashSet<String> = (0..50)
            .map(|i| image_url(&format!("Post number {i}"), "React"))
            .collect();
        assert!(urls.len() > 1);
    }
}
