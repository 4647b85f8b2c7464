//! Entity type descriptors for the website's translatable records.
//!
//! Each descriptor declares the per-language fields of a type and the ordered
//! list of fields that can serve as its human-readable headline.

use crate::content::field::FieldSpec;

/// Static description of a translatable entity type.
#[derive(Debug)]
pub struct EntityType {
    /// Type name used in placeholder labels (e.g., "Category #3")
    pub name: &'static str,

    /// snake_case key used by documents and the CLI
    pub key: &'static str,

    /// Per-language fields, in payload order
    pub fields: &'static [FieldSpec],

    /// Primary field candidates, highest priority first
    pub primary: &'static [&'static str],
}

impl EntityType {
    pub const fn new(
        name: &'static str,
        key: &'static str,
        fields: &'static [FieldSpec],
        primary: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            key,
            fields,
            primary,
        }
    }

    /// Look up a declared per-language field.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Primary candidates that the type actually declares.
    pub fn primary_fields(&self) -> impl Iterator<Item = &'static FieldSpec> + '_ {
        self.primary.iter().filter_map(|name| self.field(name))
    }
}

const NAME_ONLY: &[FieldSpec] = &[FieldSpec::text("name")];
const NAME_AND_DESCRIPTION: &[FieldSpec] =
    &[FieldSpec::text("name"), FieldSpec::text("description")];

pub static CATEGORY: EntityType = EntityType::new("Category", "category", NAME_ONLY, &["name"]);

pub static PROJECT: EntityType = EntityType::new(
    "Project",
    "project",
    &[
        FieldSpec::text("name"),
        FieldSpec::text("description"),
        FieldSpec::text("short_description"),
        FieldSpec::text("brand"),
        FieldSpec::text("country"),
        FieldSpec::list("color"),
    ],
    &["name", "color"],
);

pub static PROJECT_SEO: EntityType = EntityType::new(
    "ProjectSeo",
    "project_seo",
    &[
        FieldSpec::text("title"),
        FieldSpec::text("description"),
        FieldSpec::text("keywords"),
    ],
    &["title"],
);

pub static SERVICE_CATEGORY: EntityType =
    EntityType::new("ServiceCategory", "service_category", NAME_ONLY, &["name"]);

pub static SERVICE: EntityType =
    EntityType::new("Service", "service", NAME_AND_DESCRIPTION, &["name"]);

pub static SERVICE_ITEM: EntityType =
    EntityType::new("ServiceItem", "service_item", NAME_ONLY, &["name"]);

pub static SERVICE_DETAIL: EntityType =
    EntityType::new("ServiceDetail", "service_detail", NAME_ONLY, &["name"]);

pub static TEAM_MEMBER: EntityType = EntityType::new(
    "TeamMember",
    "team_member",
    &[
        FieldSpec::text("name"),
        FieldSpec::text("position"),
        FieldSpec::text("description"),
    ],
    &["name"],
);

/// Per-page SEO copy (about, team, contact, ...).
pub static PAGE_SEO: EntityType =
    EntityType::new("PageSeo", "page_seo", NAME_AND_DESCRIPTION, &["name"]);

pub static GALLERY: EntityType =
    EntityType::new("Gallery", "gallery", NAME_AND_DESCRIPTION, &["name"]);

/// Every catalogued type, in admin menu order.
pub static ALL: [&EntityType; 10] = [
    &CATEGORY,
    &PROJECT,
    &PROJECT_SEO,
    &SERVICE_CATEGORY,
    &SERVICE,
    &SERVICE_ITEM,
    &SERVICE_DETAIL,
    &TEAM_MEMBER,
    &PAGE_SEO,
    &GALLERY,
];

/// Find a type by its name (case-insensitive) or snake_case key.
pub fn lookup(name: &str) -> Option<&'static EntityType> {
    ALL.iter()
        .copied()
        .find(|kind| kind.key == name || kind.name.eq_ignore_ascii_case(name))
}
