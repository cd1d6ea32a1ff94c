//! Field selection flags for Places requests.
//!
//! Flags come in two tiers. A [`Field`] is a leaf: one selectable field that
//! the API knows by name. An [`Umbrella`] is configuration shorthand for a
//! group of leaves (`Basic`, `Contact`, `Atmosphere`); it is never sent on
//! the wire. A [`FieldSet`] stores leaves only, so expanding an umbrella into
//! a set is lossless and serializing the set can only ever produce leaf
//! names.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

macro_rules! fields {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A single selectable Places field, in API declaration order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Field {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )+
        }

        impl Field {
            /// Returns the lowercase name sent in the `fields` parameter.
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Returns every field in declaration order.
            #[must_use]
            pub const fn all() -> &'static [Self] {
                &[$(Self::$variant,)+]
            }
        }
    };
}

fields! {
    AddressComponent => "address_component",
    AdrAddress => "adr_address",
    BusinessStatus => "business_status",
    FormattedAddress => "formatted_address",
    Geometry => "geometry",
    Icon => "icon",
    Name => "name",
    PermanentlyClosed => "permanently_closed",
    Photo => "photo",
    PlaceId => "place_id",
    PlusCode => "plus_code",
    Type => "type",
    Url => "url",
    UtcOffset => "utc_offset",
    Vicinity => "vicinity",
    FormattedPhoneNumber => "formatted_phone_number",
    InternationalPhoneNumber => "international_phone_number",
    OpeningHours => "opening_hours",
    Website => "website",
    PriceLevel => "price_level",
    Rating => "rating",
    Review => "review",
    UserRatingsTotal => "user_ratings_total",
}

impl Field {
    const fn bit(self) -> u32 {
        1 << self as u32
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Composite flag standing for a fixed group of leaf fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Umbrella {
    /// Address, geometry, identity and classification fields.
    Basic,
    /// Phone numbers, opening hours and website.
    Contact,
    /// Price level, ratings and reviews.
    Atmosphere,
}

impl Umbrella {
    /// Returns the leaf fields this umbrella stands for.
    #[must_use]
    pub const fn fields(&self) -> FieldSet {
        match self {
            Self::Basic => FieldSet::BASIC,
            Self::Contact => FieldSet::CONTACT,
            Self::Atmosphere => FieldSet::ATMOSPHERE,
        }
    }

    /// Returns the configuration-time name of the umbrella.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Contact => "contact",
            Self::Atmosphere => "atmosphere",
        }
    }
}

/// Either tier of field flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// A single field.
    Leaf(Field),
    /// A group of fields.
    Umbrella(Umbrella),
}

impl Flag {
    /// Returns true when the flag names a single wire-level field.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns the set of leaf fields the flag covers.
    #[must_use]
    pub const fn fields(&self) -> FieldSet {
        match self {
            Self::Leaf(field) => FieldSet(field.bit()),
            Self::Umbrella(umbrella) => umbrella.fields(),
        }
    }
}

/// A set of [`Field`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldSet(u32);

impl FieldSet {
    /// No fields selected.
    pub const EMPTY: Self = Self(0);

    /// Leaves covered by [`Umbrella::Basic`].
    pub const BASIC: Self = Self::from_fields(&[
        Field::AddressComponent,
        Field::AdrAddress,
        Field::BusinessStatus,
        Field::FormattedAddress,
        Field::Geometry,
        Field::Icon,
        Field::Name,
        Field::PermanentlyClosed,
        Field::Photo,
        Field::PlaceId,
        Field::PlusCode,
        Field::Type,
        Field::Url,
        Field::UtcOffset,
        Field::Vicinity,
    ]);

    /// Leaves covered by [`Umbrella::Contact`].
    pub const CONTACT: Self = Self::from_fields(&[
        Field::FormattedPhoneNumber,
        Field::InternationalPhoneNumber,
        Field::OpeningHours,
        Field::Website,
    ]);

    /// Leaves covered by [`Umbrella::Atmosphere`].
    pub const ATMOSPHERE: Self = Self::from_fields(&[
        Field::PriceLevel,
        Field::Rating,
        Field::Review,
        Field::UserRatingsTotal,
    ]);

    /// Build a set from a slice of fields.
    #[must_use]
    pub const fn from_fields(fields: &[Field]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < fields.len() {
            bits |= fields[i].bit();
            i += 1;
        }
        Self(bits)
    }

    /// Returns true if no field is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if `field` is selected.
    #[must_use]
    pub const fn contains(&self, field: Field) -> bool {
        self.0 & field.bit() != 0
    }

    /// Returns true if every field of `other` is selected.
    #[must_use]
    pub const fn contains_all(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Iterate the selected fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Field> {
        let set = *self;
        Field::all().iter().copied().filter(move |f| set.contains(*f))
    }

    /// Every flag, of either tier, fully covered by this set.
    ///
    /// Leaves come first in declaration order, then umbrellas.
    pub fn flags(&self) -> impl Iterator<Item = Flag> {
        let set = *self;
        let umbrellas = [Umbrella::Basic, Umbrella::Contact, Umbrella::Atmosphere]
            .into_iter()
            .filter(move |u| set.contains_all(u.fields()))
            .map(Flag::Umbrella);
        self.iter().map(Flag::Leaf).chain(umbrellas)
    }

    /// Render the set as the `fields` query value: the comma-joined names of
    /// the selected leaf fields.
    #[must_use]
    pub fn to_query_value(&self) -> String {
        self.flags()
            .filter_map(|flag| match flag {
                Flag::Leaf(field) => Some(field.name()),
                Flag::Umbrella(_) => None,
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl From<Field> for FieldSet {
    fn from(field: Field) -> Self {
        Self(field.bit())
    }
}

impl From<Umbrella> for FieldSet {
    fn from(umbrella: Umbrella) -> Self {
        umbrella.fields()
    }
}

impl From<Flag> for FieldSet {
    fn from(flag: Flag) -> Self {
        flag.fields()
    }
}

impl<T: Into<FieldSet>> BitOr<T> for FieldSet {
    type Output = Self;

    fn bitor(self, rhs: T) -> Self {
        Self(self.0 | rhs.into().0)
    }
}

impl<T: Into<FieldSet>> BitOrAssign<T> for FieldSet {
    fn bitor_assign(&mut self, rhs: T) {
        self.0 |= rhs.into().0;
    }
}

impl BitOr for Field {
    type Output = FieldSet;

    fn bitor(self, rhs: Self) -> FieldSet {
        FieldSet::from(self) | rhs
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, |set, field| set | field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn umbrellas_do_not_overlap() {
        assert_eq!(FieldSet::BASIC.0 & FieldSet::CONTACT.0, 0);
        assert_eq!(FieldSet::BASIC.0 & FieldSet::ATMOSPHERE.0, 0);
        assert_eq!(FieldSet::CONTACT.0 & FieldSet::ATMOSPHERE.0, 0);
    }

    #[test]
    fn umbrellas_cover_every_field() {
        let all = FieldSet::BASIC | FieldSet::CONTACT | FieldSet::ATMOSPHERE;
        assert_eq!(all.iter().count(), Field::all().len());
    }

    #[test]
    fn iter_follows_declaration_order() {
        let set = FieldSet::from(Field::Website) | Field::Name | Field::AddressComponent;
        let names: Vec<_> = set.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["address_component", "name", "website"]);
    }

    #[test]
    fn flags_report_covered_umbrellas() {
        let set = FieldSet::from(Umbrella::Contact) | Field::Rating;
        assert!(set.flags().any(|f| f == Flag::Umbrella(Umbrella::Contact)));
        assert!(!set.flags().any(|f| f == Flag::Umbrella(Umbrella::Atmosphere)));
        assert!(set.flags().any(|f| f == Flag::Leaf(Field::Rating)));
    }

    #[test]
    fn query_value_contains_only_leaves() {
        let value = FieldSet::from(Umbrella::Contact).to_query_value();
        assert_eq!(
            value,
            "formatted_phone_number,international_phone_number,opening_hours,website"
        );
    }

    #[test]
    fn query_value_for_everything_skips_umbrella_names() {
        let value = (FieldSet::BASIC | Umbrella::Contact | Umbrella::Atmosphere).to_query_value();
        let names: Vec<_> = value.split(',').collect();
        assert_eq!(names.len(), Field::all().len());
        for umbrella in ["basic", "contact", "atmosphere"] {
            assert!(!names.contains(&umbrella));
        }
    }

    #[test]
    fn empty_set() {
        assert!(FieldSet::default().is_empty());
        assert_eq!(FieldSet::EMPTY.to_query_value(), "");
        assert!(!FieldSet::from(Field::Icon).is_empty());
    }

    #[test]
    fn collect_from_iterator() {
        let set: FieldSet = [Field::Name, Field::Geometry].into_iter().collect();
        assert!(set.contains(Field::Name));
        assert!(set.contains(Field::Geometry));
        assert!(!set.contains(Field::Icon));
    }

    #[test]
    fn leaf_check() {
        assert!(Flag::Leaf(Field::Name).is_leaf());
        assert!(!Flag::Umbrella(Umbrella::Basic).is_leaf());
        assert_eq!(Flag::Umbrella(Umbrella::Basic).fields(), FieldSet::BASIC);
    }
}
