// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use cm::model::ProductDimension;
use std::cmp::Ordering;

/// The total order over product dimensions.
///
/// Dimensions are ordered by kind first, then by level (for bidding
/// categories and product types) or attribute index (for custom attributes),
/// and finally by value. Within a kind and level, the "everything else" case
/// sorts after all the concrete values. A missing dimension (the root of a
/// tree) sorts before any dimension.
///
/// Two dimensions are the same sibling in a tree if and only if they compare
/// as [Ordering::Equal].
///
/// # Example
/// ```
/// use google_ads_adwords_shopping::ProductDimensionComparator;
/// use google_ads_adwords_shopping::dimensions::create_brand;
/// use std::cmp::Ordering;
/// let a = create_brand(Some("acme"));
/// let other = create_brand(None);
/// assert_eq!(ProductDimensionComparator::compare(Some(&a), Some(&other)), Ordering::Less);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ProductDimensionComparator;

impl ProductDimensionComparator {
    pub fn compare(a: Option<&ProductDimension>, b: Option<&ProductDimension>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => compare_dimensions(a, b),
        }
    }

    /// Returns true if both dimensions have the same kind and level.
    ///
    /// All the children of a subdivision must have the same dimension type.
    pub fn same_type(a: &ProductDimension, b: &ProductDimension) -> bool {
        kind_rank(a) == kind_rank(b) && a.dimension_type() == b.dimension_type()
    }
}

fn compare_dimensions(a: &ProductDimension, b: &ProductDimension) -> Ordering {
    kind_rank(a)
        .cmp(&kind_rank(b))
        .then_with(|| a.dimension_type().cmp(&b.dimension_type()))
        .then_with(|| compare_values(a, b))
}

fn kind_rank(d: &ProductDimension) -> u8 {
    match d {
        ProductDimension::BiddingCategory(_) => 0,
        ProductDimension::Brand(_) => 1,
        ProductDimension::CanonicalCondition(_) => 2,
        ProductDimension::CustomAttribute(_) => 3,
        ProductDimension::OfferId(_) => 4,
        ProductDimension::Type(_) => 5,
        ProductDimension::Channel(_) => 6,
        ProductDimension::ChannelExclusivity(_) => 7,
        _ => u8::MAX,
    }
}

// Only called when both dimensions have the same kind and level.
fn compare_values(a: &ProductDimension, b: &ProductDimension) -> Ordering {
    use ProductDimension as D;
    match (a, b) {
        (D::BiddingCategory(a), D::BiddingCategory(b)) => other_last(&a.value, &b.value),
        (D::Brand(a), D::Brand(b)) => other_last(&a.value, &b.value),
        (D::CanonicalCondition(a), D::CanonicalCondition(b)) => {
            other_last(&a.condition, &b.condition)
        }
        (D::CustomAttribute(a), D::CustomAttribute(b)) => other_last(&a.value, &b.value),
        (D::OfferId(a), D::OfferId(b)) => other_last(&a.value, &b.value),
        (D::Type(a), D::Type(b)) => other_last(&a.value, &b.value),
        (D::Channel(a), D::Channel(b)) => other_last(&a.channel, &b.channel),
        (D::ChannelExclusivity(a), D::ChannelExclusivity(b)) => {
            other_last(&a.channel_exclusivity, &b.channel_exclusivity)
        }
        _ => Ordering::Equal,
    }
}

fn other_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
