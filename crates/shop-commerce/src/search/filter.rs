//! Listing filter criteria.
//!
//! Query parameters arrive as loosely-typed strings ([`FilterParams`]) and
//! are parsed once, at the boundary, into [`FilterCriteria`]. Parsing is
//! strict: a malformed price bound, flag or sort key is an
//! [`CommerceError::InvalidFilter`], never a silent guess.

use crate::catalog::{split_list, Product};
use crate::error::CommerceError;
use crate::money::Money;
use crate::search::SortKey;
use crate::store::Predicate;
use serde::{Deserialize, Serialize};

/// Raw listing parameters, keyed as they appear in the shop URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterParams {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "new")]
    pub new_arrivals: Option<String>,
    #[serde(default, rename = "on-sale")]
    pub on_sale: Option<String>,
    #[serde(default, rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(default, rename = "maxPrice")]
    pub max_price: Option<String>,
    /// Comma-separated.
    #[serde(default)]
    pub colors: Option<String>,
    /// Comma-separated.
    #[serde(default)]
    pub sizes: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

impl FilterParams {
    /// Collect parameters from decoded query-string pairs.
    ///
    /// Unknown keys are ignored; a repeated key keeps its last value.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key {
                "category" => &mut params.category,
                "new" => &mut params.new_arrivals,
                "on-sale" => &mut params.on_sale,
                "minPrice" => &mut params.min_price,
                "maxPrice" => &mut params.max_price,
                "colors" => &mut params.colors,
                "sizes" => &mut params.sizes,
                "sort" => &mut params.sort,
                _ => continue,
            };
            *slot = Some(value.to_string());
        }
        params
    }
}

/// Typed listing constraints. Absent or empty fields mean "no constraint".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    /// Exact, case-sensitive category label.
    pub category: Option<String>,
    pub new_arrivals_only: bool,
    pub on_sale_only: bool,
    /// Inclusive lower bound on the list price.
    pub min_price: Option<Money>,
    /// Inclusive upper bound on the list price.
    pub max_price: Option<Money>,
    /// Any-of match, case-insensitive.
    pub colors: Vec<String>,
    /// Any-of match, case-insensitive.
    pub sizes: Vec<String>,
    pub sort: SortKey,
}

impl FilterCriteria {
    /// Criteria with no constraints and the default sort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw listing parameters.
    pub fn parse(params: &FilterParams) -> Result<Self, CommerceError> {
        let category = non_blank(params.category.as_deref()).map(String::from);
        let new_arrivals_only = parse_flag("new", params.new_arrivals.as_deref())?;
        let on_sale_only = parse_flag("on-sale", params.on_sale.as_deref())?;
        let min_price = parse_bound("minPrice", params.min_price.as_deref())?;
        let max_price = parse_bound("maxPrice", params.max_price.as_deref())?;
        let colors = params.colors.as_deref().map(split_list).unwrap_or_default();
        let sizes = params.sizes.as_deref().map(split_list).unwrap_or_default();
        let sort = match non_blank(params.sort.as_deref()) {
            None => SortKey::default(),
            Some(raw) => SortKey::parse(raw)
                .ok_or_else(|| CommerceError::invalid_filter("sort", format!("unknown sort key `{}`", raw)))?,
        };

        Ok(Self {
            category,
            new_arrivals_only,
            on_sale_only,
            min_price,
            max_price,
            colors,
            sizes,
            sort,
        })
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn new_arrivals_only(mut self) -> Self {
        self.new_arrivals_only = true;
        self
    }

    pub fn on_sale_only(mut self) -> Self {
        self.on_sale_only = true;
        self
    }

    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Check if no filter dimension is constrained.
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_none()
            && !self.new_arrivals_only
            && !self.on_sale_only
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.colors.is_empty()
            && self.sizes.is_empty()
    }

    /// Check if the price bounds are inverted, which can match nothing.
    pub fn has_empty_price_range(&self) -> bool {
        matches!((self.min_price, self.max_price), (Some(min), Some(max)) if min > max)
    }

    /// Conjunctive match over every constrained dimension.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        if self.new_arrivals_only && !product.is_new_arrival {
            return false;
        }
        if self.on_sale_only && !product.is_on_sale() {
            return false;
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        any_of(&product.colors, &self.colors) && any_of(&product.sizes, &self.sizes)
    }

    /// The simple predicates a store can evaluate on its side.
    ///
    /// Color and size any-of matching is always applied locally.
    pub fn store_predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();
        if let Some(category) = &self.category {
            predicates.push(Predicate::CategoryEq(category.clone()));
        }
        if self.new_arrivals_only {
            predicates.push(Predicate::NewArrival);
        }
        if self.on_sale_only {
            predicates.push(Predicate::OnSale);
        }
        if let Some(min) = self.min_price {
            predicates.push(Predicate::PriceAtLeast(min));
        }
        if let Some(max) = self.max_price {
            predicates.push(Predicate::PriceAtMost(max));
        }
        predicates
    }

    /// Heading for the listing page.
    pub fn title(&self) -> String {
        if let Some(category) = &self.category {
            let mut chars = category.chars();
            return match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            };
        }
        if self.new_arrivals_only {
            "New Arrivals".to_string()
        } else if self.on_sale_only {
            "On Sale".to_string()
        } else {
            "Casual".to_string()
        }
    }
}

/// Empty `wanted` matches everything; otherwise the sets must intersect.
fn any_of(offered: &[String], wanted: &[String]) -> bool {
    wanted.is_empty()
        || wanted
            .iter()
            .any(|w| offered.iter().any(|o| o.eq_ignore_ascii_case(w)))
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_flag(param: &str, raw: Option<&str>) -> Result<bool, CommerceError> {
    match non_blank(raw) {
        None => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") => Ok(false),
        Some(v) => Err(CommerceError::invalid_filter(
            param,
            format!("expected `true` or `false`, got `{}`", v),
        )),
    }
}

fn parse_bound(param: &str, raw: Option<&str>) -> Result<Option<Money>, CommerceError> {
    let Some(raw) = non_blank(raw) else {
        return Ok(None);
    };
    let bound: Money = raw
        .parse()
        .map_err(|_| CommerceError::invalid_filter(param, format!("`{}` is not a number", raw)))?;
    if bound.is_negative() {
        return Err(CommerceError::invalid_filter(
            param,
            format!("`{}` is negative", raw),
        ));
    }
    Ok(Some(bound))
}
