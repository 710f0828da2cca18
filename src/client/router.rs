/**
 * Route Guard
 *
 * Client-side routes and the navigation check run before every transition.
 *
 * | Route           | Path             | Access        |
 * |-----------------|------------------|---------------|
 * | `Home`          | `/`              | authenticated |
 * | `Login`         | `/login`         | guest         |
 * | `Register`      | `/register`      | guest         |
 * | `Words`         | `/words`         | authenticated |
 * | `RegisterWord`  | `/register-word` | authenticated |
 * | `Practice`      | `/practice`      | authenticated |
 *
 * Unauthenticated visitors to protected routes go to `Login`; authenticated
 * users visiting guest routes go to `Home`.
 */

/// Client-side route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Words,
    RegisterWord,
    Practice,
}

/// Access flags of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub guest: bool,
}

/// Outcome of the navigation guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(Route),
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Login,
        Route::Register,
        Route::Words,
        Route::RegisterWord,
        Route::Practice,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Words => "/words",
            Route::RegisterWord => "/register-word",
            Route::Practice => "/practice",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    pub fn meta(self) -> RouteMeta {
        match self {
            Route::Login | Route::Register => RouteMeta {
                requires_auth: false,
                guest: true,
            },
            Route::Home | Route::Words | Route::RegisterWord | Route::Practice => RouteMeta {
                requires_auth: true,
                guest: false,
            },
        }
    }
}

/// Decide whether navigation to `route` may proceed
pub fn guard(route: Route, authenticated: bool) -> Navigation {
    let meta = route.meta();

    if meta.requires_auth && !authenticated {
        Navigation::Redirect(Route::Login)
    } else if meta.guest && authenticated {
        Navigation::Redirect(Route::Home)
    } else {
        Navigation::Proceed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protected_routes_redirect_to_login() {
        for route in [Route::Home, Route::Words, Route::RegisterWord, Route::Practice] {
            assert_eq!(guard(route, false), Navigation::Redirect(Route::Login));
            assert_eq!(guard(route, true), Navigation::Proceed);
        }
    }

    #[test]
    fn test_guest_routes_redirect_home() {
        for route in [Route::Login, Route::Register] {
            assert_eq!(guard(route, true), Navigation::Redirect(Route::Home));
            assert_eq!(guard(route, false), Navigation::Proceed);
        }
    }

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/nowhere"), None);
    }
}
