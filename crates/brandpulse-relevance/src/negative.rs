use brandpulse_core::{Brand, Post};

use crate::matching::contains_any;

/// Drop every post whose text contains one of the brand's negative phrases.
///
/// Matching is a case-insensitive substring test OR-combined across phrases.
/// A brand without negative keywords returns the input unchanged.
#[must_use]
pub fn remove_negative_keyword_posts<'a>(posts: &[&'a Post], brand: &Brand) -> Vec<&'a Post> {
    if brand.negative_keywords.is_empty() {
        return posts.to_vec();
    }

    posts
        .iter()
        .copied()
        .filter(|post| !contains_any(&post.text.to_lowercase(), &brand.negative_keywords))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: usize, text: &str) -> Post {
        Post {
            id,
            text: text.to_string(),
            origin: "activia_1.csv".to_string(),
            record: vec![text.to_string()],
        }
    }

    fn activia() -> Brand {
        Brand {
            id: "activia".into(),
            display_name: "Activia".into(),
            handles: vec!["@activia".into()],
            alternate_names: vec![],
            negative_keywords: vec!["activia benz".into(), "mens-rights-activia".into()],
            is_nonspecific: false,
            is_food_related: false,
        }
    }

    #[test]
    fn removes_posts_with_negative_phrase_case_insensitive() {
        let posts = [
            post(0, "Activia yogurt for breakfast"),
            post(1, "Just saw an ACTIVIA Benz on the highway"),
            post(2, "the Mens-Rights-Activia crowd"),
        ];
        let refs: Vec<&Post> = posts.iter().collect();
        let kept = remove_negative_keyword_posts(&refs, &activia());
        let ids: Vec<usize> = kept.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0]);
    }

    #[test]
    fn no_negative_keywords_is_identity() {
        let mut brand = activia();
        brand.negative_keywords.clear();
        let posts = [post(0, "activia benz"), post(1, "anything")];
        let refs: Vec<&Post> = posts.iter().collect();
        let kept = remove_negative_keyword_posts(&refs, &brand);
        assert_eq!(kept, refs);
    }

    #[test]
    fn filter_is_idempotent() {
        let posts = [
            post(0, "activia benz"),
            post(1, "activia probiotic"),
            post(2, "plain"),
        ];
        let refs: Vec<&Post> = posts.iter().collect();
        let once = remove_negative_keyword_posts(&refs, &activia());
        let twice = remove_negative_keyword_posts(&once, &activia());
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_input_is_fine() {
        assert!(remove_negative_keyword_posts(&[], &activia()).is_empty());
    }
}
