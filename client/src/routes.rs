//! Static route table for the storefront.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page the router knows about is declared here once, together with the
//! access level the navigation guard enforces for it. `app.rs` binds views to
//! these entries; the guard only ever sees `RouteDef` and `RouteMeta`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Declarative access requirement attached to a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccessLevel {
    /// Anyone, signed in or not.
    #[default]
    Public,
    /// Any signed-in user.
    Authenticated,
    /// Signed-in users whose session role is `"admin"`.
    AdminOnly,
}

impl AccessLevel {
    /// Flag form of this access level, as consumed by the guard.
    pub fn meta(self) -> RouteMeta {
        match self {
            Self::Public => RouteMeta::default(),
            Self::Authenticated => RouteMeta { requires_auth: true, is_admin: false },
            Self::AdminOnly => RouteMeta { requires_auth: true, is_admin: true },
        }
    }
}

/// Per-route access flags. Both default to `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub is_admin: bool,
}

/// A single entry in the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    /// Path pattern; a segment starting with `:` matches any one segment.
    pub path: &'static str,
    /// Stable route name used for redirects.
    pub name: &'static str,
    pub access: AccessLevel,
}

impl RouteDef {
    const fn new(path: &'static str, name: &'static str, access: AccessLevel) -> Self {
        Self { path, name, access }
    }

    pub fn meta(&self) -> RouteMeta {
        self.access.meta()
    }

    /// Whether `path` (without query or fragment) matches this route's pattern.
    pub fn matches(&self, path: &str) -> bool {
        let mut pattern = segments(self.path);
        let mut actual = segments(path);
        loop {
            match (pattern.next(), actual.next()) {
                (None, None) => return true,
                (Some(p), Some(a)) => {
                    if !p.starts_with(':') && p != a {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }

    /// Render the path with its `:param` segment replaced by `param`.
    ///
    /// Routes without a parameter return their path unchanged.
    pub fn href(&self, param: &str) -> String {
        let rendered: Vec<&str> =
            segments(self.path).map(|seg| if seg.starts_with(':') { param } else { seg }).collect();
        format!("/{}", rendered.join("/"))
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|seg| !seg.is_empty())
}

pub const INDEX: RouteDef = RouteDef::new("/", "index", AccessLevel::Public);
pub const PRODUCT: RouteDef = RouteDef::new("/product", "product", AccessLevel::Public);
pub const DETAIL: RouteDef = RouteDef::new("/product/:id", "detail", AccessLevel::Public);

pub const PRODUCT_ADMIN: RouteDef = RouteDef::new("/productAdmin", "productAdmin", AccessLevel::AdminOnly);
pub const CATEGORY: RouteDef = RouteDef::new("/category", "category", AccessLevel::AdminOnly);
pub const USERS: RouteDef = RouteDef::new("/user", "user", AccessLevel::AdminOnly);
pub const ADMIN_ORDER: RouteDef = RouteDef::new("/admin-order", "admin-order", AccessLevel::AdminOnly);
pub const DASHBOARD_STATS: RouteDef =
    RouteDef::new("/dashboard-stats", "dashboard-stats", AccessLevel::AdminOnly);
pub const REVIEW_MANAGER: RouteDef = RouteDef::new("/review-manager", "review-manager", AccessLevel::AdminOnly);

pub const PROFILE: RouteDef = RouteDef::new("/profile", "profile", AccessLevel::Authenticated);
pub const CART: RouteDef = RouteDef::new("/cart", "cart", AccessLevel::Authenticated);
pub const CHECKOUT: RouteDef = RouteDef::new("/checkout", "checkout", AccessLevel::Authenticated);
pub const ORDER_HISTORY: RouteDef = RouteDef::new("/order-history", "order-history", AccessLevel::Authenticated);
pub const FAVORITES: RouteDef = RouteDef::new("/favorites-page", "favorites-page", AccessLevel::Authenticated);

pub const LOGIN: RouteDef = RouteDef::new("/login", "login", AccessLevel::Public);
pub const REGISTER: RouteDef = RouteDef::new("/register", "register", AccessLevel::Public);
pub const FORGOT_PASSWORD: RouteDef = RouteDef::new("/forgot-password", "forgot-password", AccessLevel::Public);

pub const PERMISSION_DENIED: RouteDef = RouteDef::new("/503", "permissionDenied", AccessLevel::Public);

/// All routes, in match order.
pub const ROUTES: &[RouteDef] = &[
    INDEX,
    PRODUCT,
    DETAIL,
    PRODUCT_ADMIN,
    CATEGORY,
    USERS,
    ADMIN_ORDER,
    DASHBOARD_STATS,
    REVIEW_MANAGER,
    PROFILE,
    CART,
    CHECKOUT,
    ORDER_HISTORY,
    FAVORITES,
    LOGIN,
    REGISTER,
    FORGOT_PASSWORD,
    PERMISSION_DENIED,
];

/// Look up a route by its name.
pub fn by_name(name: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|route| route.name == name)
}

/// Resolve a location to the first matching route.
///
/// Query strings and fragments are ignored, as are repeated or trailing
/// slashes.
pub fn resolve(location: &str) -> Option<&'static RouteDef> {
    let path = location.split(['?', '#']).next().unwrap_or_default();
    ROUTES.iter().find(|route| route.matches(path))
}
