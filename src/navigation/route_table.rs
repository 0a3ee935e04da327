//! Route table built from the configured dashboard menu.

use super::{NavigationResolver, ResolvedView};
use practice_desk_config::{MenuEntry, normalize_route_path};

/// Back-office area a view belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PracticeModule {
    Dashboard,
    Patients,
    Inventory,
    PurchaseOrders,
    Staff,
    Cash,
    Reports,
    Settings,
    Other,
}

impl PracticeModule {
    /// Module named by the first segment of a normalised route
    pub fn from_route(route: &str) -> Self {
        let first = route.trim_start_matches('/').split('/').next().unwrap_or("");
        match first {
            "" | "dashboard" => PracticeModule::Dashboard,
            "patients" => PracticeModule::Patients,
            "inventory" | "stock" => PracticeModule::Inventory,
            "purchase-orders" | "purchase_orders" | "orders" => PracticeModule::PurchaseOrders,
            "staff" => PracticeModule::Staff,
            "cash" | "transactions" => PracticeModule::Cash,
            "reports" => PracticeModule::Reports,
            "settings" => PracticeModule::Settings,
            _ => PracticeModule::Other,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            PracticeModule::Dashboard => "Dashboard",
            PracticeModule::Patients => "Patients",
            PracticeModule::Inventory => "Inventory",
            PracticeModule::PurchaseOrders => "Purchase Orders",
            PracticeModule::Staff => "Staff",
            PracticeModule::Cash => "Cash",
            PracticeModule::Reports => "Reports",
            PracticeModule::Settings => "Settings",
            PracticeModule::Other => "Other",
        }
    }
}

/// Content handle for tabs opened through the route table.
///
/// The rendering layer mounts the view for `module`, optionally focused on
/// `record` (e.g. the `42` in `/patients/42`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRef {
    pub module: PracticeModule,
    pub route: String,
    pub record: Option<String>,
}

/// Menu-backed [`NavigationResolver`].
///
/// Top-level menu paths resolve directly. Deeper paths resolve through the
/// longest menu entry they extend, so `/patients/42` opens its own tab
/// titled `Patients / 42`. The root entry only matches `/` itself.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    /// (normalised route, entry), in menu order
    entries: Vec<(String, MenuEntry)>,
}

impl RouteTable {
    pub fn from_menu(menu: &[MenuEntry]) -> Self {
        let entries = menu
            .iter()
            .map(|entry| (entry.route(), entry.clone()))
            .collect();
        Self { entries }
    }

    /// Menu entries in display order
    pub fn entries(&self) -> impl Iterator<Item = &MenuEntry> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup<'s, 'r>(&'s self, route: &'r str) -> Option<(&'s MenuEntry, Option<&'r str>)> {
        if let Some((_, entry)) = self.entries.iter().find(|(r, _)| r == route) {
            return Some((entry, None));
        }

        self.entries
            .iter()
            .filter(|(r, _)| r != "/")
            .filter_map(|(r, entry)| {
                route
                    .strip_prefix(r.as_str())
                    .and_then(|rest| rest.strip_prefix('/'))
                    .map(|record| (r.len(), entry, record))
            })
            .max_by_key(|(len, _, _)| *len)
            .map(|(_, entry, record)| (entry, Some(record)))
    }
}

impl NavigationResolver<ViewRef> for RouteTable {
    fn resolve(&self, path: &str) -> Option<ResolvedView<ViewRef>> {
        let route = normalize_route_path(path);
        let (entry, record) = self.lookup(&route)?;

        let title = match record {
            Some(record) => format!("{} / {}", entry.title, record),
            None => entry.title.clone(),
        };
        let content = ViewRef {
            module: PracticeModule::from_route(&route),
            route: route.clone(),
            record: record.map(str::to_string),
        };

        Some(ResolvedView {
            path: route,
            title,
            icon: entry.icon.clone(),
            color: entry.color.clone(),
            closable: entry.closable,
            content,
        })
    }
}
