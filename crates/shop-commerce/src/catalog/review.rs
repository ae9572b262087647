//! Product reviews and rating summaries.

use crate::error::CommerceError;
use crate::ids::{ProductId, ReviewId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_id: UserId,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub comment: String,
    /// Reviewer display name, when the profile has one.
    #[serde(default)]
    pub author_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Render the rating as filled and empty stars.
    pub fn stars(&self) -> String {
        let filled = self.rating.min(5) as usize;
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

/// Review form input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub rating: u8,
    pub comment: String,
}

impl ReviewDraft {
    /// Validate the draft into a review by `user_id` for `product_id`.
    pub fn into_review(
        self,
        product_id: ProductId,
        user_id: UserId,
        author_name: Option<String>,
    ) -> Result<Review, CommerceError> {
        if !(1..=5).contains(&self.rating) {
            return Err(CommerceError::ValidationError(format!(
                "rating must be between 1 and 5, got {}",
                self.rating
            )));
        }
        let comment = self.comment.trim();
        if comment.is_empty() {
            return Err(CommerceError::ValidationError(
                "comment must not be empty".to_string(),
            ));
        }

        Ok(Review {
            id: ReviewId::generate(),
            product_id,
            user_id,
            rating: self.rating,
            comment: comment.to_string(),
            author_name,
            created_at: Utc::now(),
        })
    }
}

/// Aggregate of a product's reviews.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RatingSummary {
    /// Mean star rating, 0.0 when there are no reviews.
    pub average: f64,
    pub total: u32,
    /// Count of 1-star through 5-star reviews, index 0 is 1 star.
    pub distribution: [u32; 5],
}

impl RatingSummary {
    pub fn from_reviews<'a>(reviews: impl IntoIterator<Item = &'a Review>) -> Self {
        let mut distribution = [0u32; 5];
        let mut sum = 0u64;
        let mut total = 0u32;

        for review in reviews {
            if !(1..=5).contains(&review.rating) {
                continue;
            }
            distribution[(review.rating - 1) as usize] += 1;
            sum += review.rating as u64;
            total += 1;
        }

        let average = if total == 0 {
            0.0
        } else {
            sum as f64 / total as f64
        };

        Self {
            average,
            total,
            distribution,
        }
    }

    /// Number of reviews with exactly `stars` stars.
    pub fn count(&self, stars: u8) -> u32 {
        match stars {
            1..=5 => self.distribution[(stars - 1) as usize],
            _ => 0,
        }
    }

    /// Share of reviews with `stars` stars, as a percentage.
    pub fn percentage(&self, stars: u8) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.count(stars) as f64 / self.total as f64) * 100.0
    }
}
