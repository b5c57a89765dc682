//! Trust review strip on the home page
//!
//! Reviews are joined to backend products by `product_id`. The text comes
//! from the product description when there is one, the image from the
//! review's first photo before falling back to the product image.

use champa_core::{
    ProductRecord, Review,
    labels::{normalize_image_path, truncate_chars},
};

/// Reviews shown on the home page
pub const SHOWN_REVIEWS: usize = 3;

/// Review text length before truncation
pub const REVIEW_TEXT_LIMIT: usize = 120;

/// Name shown when a review has none
pub const ANONYMOUS: &str = "ລູກຄ້າ";

/// A review ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustReview {
    pub customer: String,
    pub product_name: Option<String>,
    /// Star count, 0 to 5
    pub stars: u8,
    pub text: String,
    pub image: Option<String>,
}

impl TrustReview {
    /// Stars as a printable string
    pub fn star_string(&self) -> String {
        "⭐".repeat(self.stars as usize)
    }
}

/// Clamp a rating to the 0-5 star range
pub fn clamp_stars(rating: Option<i64>) -> u8 {
    rating.unwrap_or(0).clamp(0, 5) as u8
}

/// Assemble a display review from a raw review and the product list
pub fn assemble(review: &Review, products: &[ProductRecord]) -> TrustReview {
    let product = review
        .product_id
        .and_then(|id| products.iter().find(|p| p.id == id));

    let text = product
        .and_then(|p| p.description.as_deref())
        .filter(|d| !d.is_empty())
        .or(review.comment.as_deref())
        .unwrap_or("");

    let image = review
        .images
        .first()
        .and_then(|img| normalize_image_path(Some(img.as_str())))
        .or_else(|| product.and_then(|p| normalize_image_path(p.image.as_deref())));

    TrustReview {
        customer: review
            .customer_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| ANONYMOUS.to_string()),
        product_name: product.map(|p| p.name.clone()),
        stars: clamp_stars(review.rating),
        text: truncate_chars(text, REVIEW_TEXT_LIMIT),
        image,
    }
}

/// The first [`SHOWN_REVIEWS`] reviews, assembled
pub fn trust_reviews(reviews: &[Review], products: &[ProductRecord]) -> Vec<TrustReview> {
    reviews
        .iter()
        .take(SHOWN_REVIEWS)
        .map(|review| assemble(review, products))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn review(product_id: Option<i64>, rating: Option<i64>) -> Review {
        Review {
            id: None,
            product_id,
            customer_name: Some("Noy".to_string()),
            rating,
            comment: Some("Great fit".to_string()),
            images: Vec::new(),
            created_at: None,
        }
    }

    fn product(id: i64, description: Option<&str>) -> ProductRecord {
        ProductRecord {
            id,
            name: format!("Kit {id}"),
            price: 0.0,
            stock: None,
            image: Some("uploads/product/kit.png".to_string()),
            description: description.map(str::to_string),
            category: None,
            price_type: None,
        }
    }

    #[test]
    fn test_stars_are_clamped() {
        assert_eq!(clamp_stars(Some(9)), 5);
        assert_eq!(clamp_stars(Some(-2)), 0);
        assert_eq!(clamp_stars(None), 0);
        assert_eq!(clamp_stars(Some(4)), 4);
    }

    #[test]
    fn test_product_description_wins() {
        let products = vec![product(1, Some("Soft cotton"))];
        let shown = assemble(&review(Some(1), Some(5)), &products);
        assert_eq!(shown.text, "Soft cotton");
        assert_eq!(shown.product_name.as_deref(), Some("Kit 1"));
        assert_eq!(shown.image.as_deref(), Some("/static/uploads/product/kit.png"));
        assert_eq!(shown.star_string(), "⭐⭐⭐⭐⭐");
    }

    #[test]
    fn test_comment_and_review_image_fallbacks() {
        let products = vec![product(1, None)];
        let mut raw = review(Some(1), Some(3));
        raw.images = vec!["/static/uploads/review/r.jpg".to_string()];
        let shown = assemble(&raw, &products);
        assert_eq!(shown.text, "Great fit");
        assert_eq!(shown.image.as_deref(), Some("/static/uploads/review/r.jpg"));

        let mut orphan = review(Some(99), None);
        orphan.customer_name = None;
        let shown = assemble(&orphan, &products);
        assert_eq!(shown.customer, ANONYMOUS);
        assert_eq!(shown.product_name, None);
        assert_eq!(shown.image, None);
    }

    #[test]
    fn test_only_first_three() {
        let reviews: Vec<Review> = (0..5).map(|_| review(None, Some(4))).collect();
        assert_eq!(trust_reviews(&reviews, &[]).len(), 3);
        assert!(trust_reviews(&[], &[]).is_empty());
    }

    #[test]
    fn test_long_text_truncated() {
        let mut raw = review(None, Some(4));
        raw.comment = Some("a".repeat(200));
        let shown = assemble(&raw, &[]);
        assert_eq!(shown.text.chars().count(), REVIEW_TEXT_LIMIT + 1);
    }
}
