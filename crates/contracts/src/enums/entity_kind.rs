use serde::{Deserialize, Serialize};

/// Виды бизнес-сущностей школы (у каждой свои list/detail/form страницы)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Customer,
    Hotel,
    Agency,
    Instructor,
    Staff,
    CompanyAccount,
    ThirdParty,
    Transaction,
    Order,
    Product,
    Service,
    ServicePackage,
    Appointment,
    User,
}

impl EntityKind {
    pub const COUNT: usize = 14;

    /// Все виды в порядке объявления; `ALL[kind.index()] == kind`
    pub const ALL: [EntityKind; Self::COUNT] = [
        EntityKind::Customer,
        EntityKind::Hotel,
        EntityKind::Agency,
        EntityKind::Instructor,
        EntityKind::Staff,
        EntityKind::CompanyAccount,
        EntityKind::ThirdParty,
        EntityKind::Transaction,
        EntityKind::Order,
        EntityKind::Product,
        EntityKind::Service,
        EntityKind::ServicePackage,
        EntityKind::Appointment,
        EntityKind::User,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Singular camelCase tag, e.g. `"companyAccount"`
    pub fn code(&self) -> &'static str {
        match self {
            EntityKind::Customer => "customer",
            EntityKind::Hotel => "hotel",
            EntityKind::Agency => "agency",
            EntityKind::Instructor => "instructor",
            EntityKind::Staff => "staff",
            EntityKind::CompanyAccount => "companyAccount",
            EntityKind::ThirdParty => "thirdParty",
            EntityKind::Transaction => "transaction",
            EntityKind::Order => "order",
            EntityKind::Product => "product",
            EntityKind::Service => "service",
            EntityKind::ServicePackage => "servicePackage",
            EntityKind::Appointment => "appointment",
            EntityKind::User => "user",
        }
    }

    /// List page tag, e.g. `"companyAccounts"`
    pub fn list_code(&self) -> &'static str {
        match self {
            EntityKind::Customer => "customers",
            EntityKind::Hotel => "hotels",
            EntityKind::Agency => "agencies",
            EntityKind::Instructor => "instructors",
            EntityKind::Staff => "staff",
            EntityKind::CompanyAccount => "companyAccounts",
            EntityKind::ThirdParty => "thirdParties",
            EntityKind::Transaction => "transactions",
            EntityKind::Order => "orders",
            EntityKind::Product => "products",
            EntityKind::Service => "services",
            EntityKind::ServicePackage => "servicePackages",
            EntityKind::Appointment => "appointments",
            EntityKind::User => "users",
        }
    }

    /// REST collection segment: `/api/{collection}`
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Customer => "customers",
            EntityKind::Hotel => "hotels",
            EntityKind::Agency => "agencies",
            EntityKind::Instructor => "instructors",
            EntityKind::Staff => "staff",
            EntityKind::CompanyAccount => "company-accounts",
            EntityKind::ThirdParty => "third-parties",
            EntityKind::Transaction => "transactions",
            EntityKind::Order => "orders",
            EntityKind::Product => "products",
            EntityKind::Service => "services",
            EntityKind::ServicePackage => "service-packages",
            EntityKind::Appointment => "appointments",
            EntityKind::User => "users",
        }
    }

    /// Имя элемента для UI (единственное число)
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Customer => "Customer",
            EntityKind::Hotel => "Hotel",
            EntityKind::Agency => "Agency",
            EntityKind::Instructor => "Instructor",
            EntityKind::Staff => "Staff member",
            EntityKind::CompanyAccount => "Company account",
            EntityKind::ThirdParty => "Third party",
            EntityKind::Transaction => "Transaction",
            EntityKind::Order => "Order",
            EntityKind::Product => "Product",
            EntityKind::Service => "Service",
            EntityKind::ServicePackage => "Service package",
            EntityKind::Appointment => "Appointment",
            EntityKind::User => "User",
        }
    }

    /// Имя списка для UI (множественное число)
    pub fn list_name(&self) -> &'static str {
        match self {
            EntityKind::Customer => "Customers",
            EntityKind::Hotel => "Hotels",
            EntityKind::Agency => "Agencies",
            EntityKind::Instructor => "Instructors",
            EntityKind::Staff => "Staff",
            EntityKind::CompanyAccount => "Company accounts",
            EntityKind::ThirdParty => "Third parties",
            EntityKind::Transaction => "Transactions",
            EntityKind::Order => "Orders",
            EntityKind::Product => "Products",
            EntityKind::Service => "Services",
            EntityKind::ServicePackage => "Service packages",
            EntityKind::Appointment => "Appointments",
            EntityKind::User => "Users",
        }
    }

    /// Kinds listed on this kind's detail page as related records.
    pub fn children(&self) -> &'static [EntityKind] {
        match self {
            EntityKind::Customer => &[EntityKind::Order, EntityKind::Appointment],
            EntityKind::Service => &[EntityKind::ServicePackage],
            EntityKind::Order => &[EntityKind::Appointment],
            _ => &[],
        }
    }

    /// Foreign-key field that links a record of this kind to a `parent` record.
    pub fn parent_field(&self, parent: EntityKind) -> Option<&'static str> {
        match (self, parent) {
            (EntityKind::Order, EntityKind::Customer) => Some("customer_id"),
            (EntityKind::Appointment, EntityKind::Customer) => Some("customer_id"),
            (EntityKind::Appointment, EntityKind::Order) => Some("order_id"),
            (EntityKind::ServicePackage, EntityKind::Service) => Some("service_id"),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn from_list_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.list_code() == code)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, kind) in EntityKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn test_codes_round_trip() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_code(kind.code()), Some(kind));
            assert_eq!(EntityKind::from_list_code(kind.list_code()), Some(kind));
        }
        assert_eq!(EntityKind::from_code("customers"), None);
        assert_eq!(EntityKind::from_list_code("staffs"), None);
    }

    #[test]
    fn test_children_have_parent_fields() {
        for kind in EntityKind::ALL {
            for child in kind.children() {
                assert!(child.parent_field(kind).is_some(), "{} -> {}", kind, child);
            }
        }
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&EntityKind::CompanyAccount).unwrap();
        assert_eq!(json, "\"companyAccount\"");
        let kind: EntityKind = serde_json::from_str("\"servicePackage\"").unwrap();
        assert_eq!(kind, EntityKind::ServicePackage);
    }
}
