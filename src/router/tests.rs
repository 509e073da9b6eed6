//! Tests for the router.

#[cfg(test)]
mod router_tests {
    use std::collections::HashSet;
    use std::io;
    use std::sync::Arc;
    use std::thread;

    use serde_json::Value;

    use crate::route::{ActionError, ActionSpec, Content, Error as RouteError, Method, Methods, Parameters};
    use crate::router::{ConditionContext, Error, Router, RouterConfig};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn text(body: &'static str) -> ActionSpec {
        ActionSpec::handler(move |_| Ok(Content::from(body)))
    }

    fn active(predicates: &[&str]) -> HashSet<String> {
        predicates.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_router_creation() {
        let config = RouterConfig {
            implicit_head: false,
            decode_parameters: false,
        };

        let router = Router::new(config.clone());
        assert_eq!(router.config, config);
        assert!(router.routes().is_empty());
        assert_eq!(Router::default().config, RouterConfig::default());
    }

    #[test]
    fn test_add_route() {
        init_logger();
        let mut router = Router::default();

        let route = router.get("front", text("front")).unwrap();
        assert_eq!(route.condition(), "is_front_page");
        assert_eq!(route.methods(), &Methods::from(Method::GET));

        let route = router.any("page", text("page")).unwrap();
        assert_eq!(route.condition_key(), "page");
        let route = router.post("search", text("search")).unwrap();
        assert_eq!(route.condition_key(), "search");

        let routes = router.routes();
        assert_eq!(routes.len(), 3);
        assert_eq!(routes[1].methods(), &Methods::any());
        assert_eq!(routes[2].condition_key(), "search");
    }

    #[test]
    fn test_add_route_with_unknown_condition() {
        let mut router = Router::default();
        let result = router.get("frontpage", text("front"));
        assert!(matches!(result, Err(Error::Route(RouteError::ConditionNotFound(ref key))) if key == "frontpage"));
        assert!(router.routes().is_empty());
    }

    #[test]
    fn test_dispatch_by_condition() {
        let mut router = Router::default();
        router.get("front", text("front")).unwrap();
        router.get("page", text("page")).unwrap();

        let content = router.dispatch(Method::GET, &active(&["is_page"]), Parameters::new()).unwrap();
        assert_eq!(content, Content::from("page"));

        let content = router.dispatch(Method::GET, &active(&["is_front_page"]), Parameters::new()).unwrap();
        assert_eq!(content, Content::from("front"));
    }

    #[test]
    fn test_first_registered_route_wins() {
        let mut router = Router::default();
        router.get("singular", text("singular")).unwrap();
        router.get("single", text("single")).unwrap();

        let context = |predicate: &str| matches!(predicate, "is_singular" | "is_single");
        let content = router.dispatch(Method::GET, &context, Parameters::new()).unwrap();
        assert_eq!(content, Content::from("singular"));
    }

    #[test]
    fn test_no_match() {
        let mut router = Router::default();
        router.get("front", text("front")).unwrap();

        let result = router.dispatch(Method::GET, &active(&["is_404"]), Parameters::new());
        assert!(matches!(result, Err(Error::NoMatch(Method::GET))));
    }

    #[test]
    fn test_method_not_allowed() {
        let mut router = Router::default();
        router.get("page", text("get")).unwrap();
        router.add([Method::PUT, Method::GET], "page", text("put")).unwrap();

        let result = router.find(Method::DELETE, &active(&["is_page"]));
        match result {
            Err(Error::MethodNotAllowed { method, condition, allowed }) => {
                assert_eq!(method, Method::DELETE);
                assert_eq!(condition, "page");
                assert_eq!(allowed, vec![Method::GET, Method::PUT]);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        // Later routes are still tried for the method
        let content = router.dispatch(Method::PUT, &active(&["is_page"]), Parameters::new()).unwrap();
        assert_eq!(content, Content::from("put"));
    }

    #[test]
    fn test_method_not_allowed_lists_every_satisfied_route() {
        let mut router = Router::default();
        router.get("singular", text("singular")).unwrap();
        router.post("single", text("single")).unwrap();
        router.put("page", text("page")).unwrap();

        let context = |predicate: &str| matches!(predicate, "is_singular" | "is_single");
        match router.find(Method::DELETE, &context) {
            Err(Error::MethodNotAllowed { condition, allowed, .. }) => {
                assert_eq!(condition, "singular");
                assert_eq!(allowed, vec![Method::GET, Method::POST]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_implicit_head() {
        let mut router = Router::default();
        router.get("home", text("home")).unwrap();

        let content = router.dispatch(Method::HEAD, &active(&["is_home"]), Parameters::new()).unwrap();
        assert_eq!(content, Content::from("home"));

        let mut strict = Router::new(RouterConfig {
            implicit_head: false,
            ..RouterConfig::default()
        });
        strict.get("home", text("home")).unwrap();
        let result = strict.find(Method::HEAD, &active(&["is_home"]));
        assert!(matches!(result, Err(Error::MethodNotAllowed { method: Method::HEAD, .. })));
    }

    #[test]
    fn test_dispatch_binds_per_request() {
        let mut router = Router::default();
        router.get("single", ActionSpec::handler(|params| {
            Ok(Content::from(format!("post-{}", params.str("slug").unwrap_or("none"))))
        }))
        .unwrap();

        let context = active(&["is_single"]);
        let content = router
            .dispatch(Method::GET, &context, Parameters::new().with("slug", "hello%20world").with("page", Value::Null))
            .unwrap();
        assert_eq!(content, Content::from("post-hello world"));
        assert!(!router.routes()[0].is_bound());
    }

    #[test]
    fn test_dispatch_without_decoding() {
        let mut router = Router::new(RouterConfig {
            decode_parameters: false,
            ..RouterConfig::default()
        });
        router.get("single", ActionSpec::handler(|params| {
            Ok(Content::from(params.str("slug").unwrap_or_default().to_string()))
        }))
        .unwrap();

        let content = router
            .dispatch(Method::GET, &active(&["is_single"]), Parameters::new().with("slug", "a%2Fb"))
            .unwrap();
        assert_eq!(content, Content::from("a%2Fb"));
    }

    #[test]
    fn test_dispatch_propagates_action_error() {
        let mut router = Router::default();
        router.get("404", ActionSpec::handler(|_| {
            Err(Box::new(io::Error::new(io::ErrorKind::NotFound, "template missing")) as ActionError)
        }))
        .unwrap();

        let err = router.dispatch(Method::GET, &active(&["is_404"]), Parameters::new()).unwrap_err();
        assert_eq!(err.to_string(), "template missing");
        match err {
            Error::Route(RouteError::Action(inner)) => {
                let io_err = inner.downcast_ref::<io::Error>().unwrap();
                assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_concurrent_dispatch() {
        let mut router = Router::default();
        router.get("page", ActionSpec::handler(|params| {
            Ok(Content::from(format!("page-{}", params.str("id").unwrap_or_default())))
        }))
        .unwrap();
        let router = Arc::new(router);

        let handles: Vec<_> = ["1", "2", "3"]
            .into_iter()
            .map(|id| {
                let router = Arc::clone(&router);
                thread::spawn(move || {
                    let context = |predicate: &str| predicate == "is_page";
                    router.dispatch(Method::GET, &context, Parameters::new().with("id", id)).unwrap()
                })
            })
            .collect();

        let results: Vec<Content> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![Content::from("page-1"), Content::from("page-2"), Content::from("page-3")]);
    }

    #[test]
    fn test_condition_contexts() {
        let set: HashSet<&str> = ["is_home"].into_iter().collect();
        assert!(set.is_satisfied("is_home"));
        assert!(!set.is_satisfied("is_page"));

        let closure = |predicate: &str| predicate.starts_with("is_");
        assert!(closure.is_satisfied("is_tax"));
        assert!(!closure.is_satisfied("themosisIsTemplate"));
    }

    #[test]
    fn test_config_from_json() {
        let config = RouterConfig::from_json(r#"{"implicit_head": false}"#).unwrap();
        assert!(!config.implicit_head);
        assert!(config.decode_parameters);

        assert_eq!(RouterConfig::from_json("{}").unwrap(), RouterConfig::default());
        assert!(matches!(RouterConfig::from_json("{"), Err(Error::Config(_))));
    }
}
