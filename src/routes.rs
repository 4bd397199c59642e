//! Route table and path-to-screen resolution.
//!
//! Paths are matched exactly against the three known routes; anything else
//! resolves to the dedicated not-found screen rather than rendering nothing.

/// A navigable route shown in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRoute {
    pub path: &'static str,
    pub label: &'static str,
}

/// The three fixed routes, in sidebar order.
pub const NAV_ROUTES: [NavRoute; 3] = [
    NavRoute {
        path: "/",
        label: "Dashboard",
    },
    NavRoute {
        path: "/users",
        label: "Users",
    },
    NavRoute {
        path: "/revenue",
        label: "Revenue",
    },
];

/// The screen selected by the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Users,
    Revenue,
    NotFound,
}

impl Screen {
    /// Resolve a path to a screen. Unmatched paths get the not-found
    /// screen, never an empty render.
    pub fn resolve(path: &str) -> Screen {
        match path {
            "/" => Screen::Dashboard,
            "/users" => Screen::Users,
            "/revenue" => Screen::Revenue,
            _ => Screen::NotFound,
        }
    }

    /// Canonical path for this screen, if it is a navigable route.
    pub fn path(self) -> Option<&'static str> {
        self.nav_index().map(|i| NAV_ROUTES[i].path)
    }

    pub fn title(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Users => "Users",
            Screen::Revenue => "Revenue",
            Screen::NotFound => "Not Found",
        }
    }

    /// Position in the sidebar, if any.
    pub fn nav_index(self) -> Option<usize> {
        match self {
            Screen::Dashboard => Some(0),
            Screen::Users => Some(1),
            Screen::Revenue => Some(2),
            Screen::NotFound => None,
        }
    }

    /// Next sidebar route in cycle order. From the not-found screen this
    /// returns to the dashboard.
    pub fn next_nav(self) -> Screen {
        match self.nav_index() {
            Some(i) => Screen::resolve(NAV_ROUTES[(i + 1) % NAV_ROUTES.len()].path),
            None => Screen::Dashboard,
        }
    }

    /// Previous sidebar route in cycle order.
    pub fn prev_nav(self) -> Screen {
        match self.nav_index() {
            Some(i) => {
                let len = NAV_ROUTES.len();
                Screen::resolve(NAV_ROUTES[(i + len - 1) % len].path)
            }
            None => Screen::Dashboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_paths_resolve() {
        assert_eq!(Screen::resolve("/"), Screen::Dashboard);
        assert_eq!(Screen::resolve("/users"), Screen::Users);
        assert_eq!(Screen::resolve("/revenue"), Screen::Revenue);
    }

    #[test]
    fn test_unknown_paths_resolve_to_not_found() {
        assert_eq!(Screen::resolve("/foo"), Screen::NotFound);
        assert_eq!(Screen::resolve(""), Screen::NotFound);
        assert_eq!(Screen::resolve("/users/"), Screen::NotFound);
        assert_eq!(Screen::resolve("/Users"), Screen::NotFound);
    }

    #[test]
    fn test_nav_cycle_visits_all_routes() {
        let mut screen = Screen::Dashboard;
        let mut seen = Vec::new();
        for _ in 0..NAV_ROUTES.len() {
            seen.push(screen);
            screen = screen.next_nav();
        }
        assert_eq!(screen, Screen::Dashboard);
        assert_eq!(
            seen,
            vec![Screen::Dashboard, Screen::Users, Screen::Revenue]
        );

        assert_eq!(Screen::Dashboard.prev_nav(), Screen::Revenue);
        assert_eq!(Screen::Revenue.prev_nav(), Screen::Users);
    }

    #[test]
    fn test_not_found_cycles_back_to_dashboard() {
        assert_eq!(Screen::NotFound.next_nav(), Screen::Dashboard);
        assert_eq!(Screen::NotFound.prev_nav(), Screen::Dashboard);
        assert_eq!(Screen::NotFound.path(), None);
    }

    #[test]
    fn test_route_table_round_trips() {
        for route in NAV_ROUTES {
            let screen = Screen::resolve(route.path);
            assert_eq!(screen.path(), Some(route.path));
            assert_eq!(screen.title(), route.label);
        }
    }
}
