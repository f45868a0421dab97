use super::*;

fn route(path: &str, name: &str) -> Route {
    Route::new(path, name, ViewId::new(name))
}

// =============================================================================
// resolve
// =============================================================================

#[test]
fn resolves_every_registered_path() {
    let table = RouteTable::questionnaire();
    for def in ROUTE_DEFS {
        let found = table.resolve(def.path).expect("registered path should resolve");
        assert_eq!(found.name, def.name);
    }
}

#[test]
fn resolves_every_registered_name() {
    let table = RouteTable::questionnaire();
    for def in ROUTE_DEFS {
        let found = table.resolve(def.name).expect("registered name should resolve");
        assert_eq!(found.path, def.path);
    }
}

#[test]
fn landing_page_is_bound_to_root() {
    let table = RouteTable::questionnaire();
    assert_eq!(table.resolve("/").unwrap().name, LANDING_PAGE);
    assert_eq!(table.resolve(LANDING_PAGE).unwrap().path, "/");
}

#[test]
fn unknown_strings_are_not_found() {
    let table = RouteTable::questionnaire();
    for target in ["/DoesNotExist", "DoesNotExist", "", "/loginpage", "LoginPage/", "/LandingPage"] {
        assert_eq!(
            table.resolve(target),
            Err(NavError::RouteNotFound { target: target.to_string() }),
            "{target:?} should not resolve"
        );
    }
}

#[test]
fn get_and_get_path_do_not_cross_match() {
    let table = RouteTable::questionnaire();
    assert!(table.get("/EndPage").is_none());
    assert!(table.get_path(END_PAGE).is_none());
    assert_eq!(table.get(END_PAGE), table.get_path("/EndPage"));
}

// =============================================================================
// construction
// =============================================================================

#[test]
fn questionnaire_table_has_six_routes() {
    let table = RouteTable::questionnaire();
    assert_eq!(table.len(), 6);
    assert!(!table.is_empty());
    let names: Vec<&str> = table.iter().map(|r| r.name.as_str()).collect();
    for name in [LOGIN_PAGE, LANDING_PAGE, SELECT_PROGRAM, QUESTIONNAIRE, ANSWERS, END_PAGE] {
        assert!(names.contains(&name), "missing {name}");
    }
}

#[test]
fn static_defs_pass_validation() {
    let routes = ROUTE_DEFS.iter().map(Route::from).collect();
    assert!(RouteTable::new(routes).is_ok());
}

#[test]
fn questionnaire_indexes_every_def_by_path_and_name() {
    let table = RouteTable::questionnaire();
    assert_eq!(table.len(), ROUTE_DEFS.len());
    for def in ROUTE_DEFS {
        assert_eq!(table.get(def.name).map(|r| r.path.as_str()), Some(def.path));
        assert_eq!(table.get_path(def.path).map(|r| r.name.as_str()), Some(def.name));
    }
}

#[test]
fn resolve_accepts_unconventional_shapes() {
    let table = RouteTable::new(vec![route("about", "About"), route("/x", "/Alias")]).unwrap();
    assert_eq!(table.resolve("about").unwrap().name, "About");
    assert_eq!(table.resolve("About").unwrap().path, "about");
    assert_eq!(table.resolve("/Alias").unwrap().path, "/x");
}

#[test]
fn duplicate_name_rejected() {
    let err = RouteTable::new(vec![route("/a", "A"), route("/b", "A")]).unwrap_err();
    assert!(matches!(err, RouteTableError::DuplicateName(name) if name == "A"));
}

#[test]
fn duplicate_path_rejected() {
    let err = RouteTable::new(vec![route("/a", "A"), route("/a", "B")]).unwrap_err();
    assert!(matches!(err, RouteTableError::DuplicatePath(path) if path == "/a"));
}

#[test]
fn from_json_builds_table() {
    let json = r#"[
        {"path": "/LoginPage", "name": "LoginPage", "view": "login-view"},
        {"path": "/", "name": "LandingPage", "view": "landing-view"}
    ]"#;
    let table = RouteTable::from_json(json).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.resolve("/").unwrap().view.as_str(), "landing-view");
}

#[test]
fn from_json_rejects_duplicates() {
    let json = r#"[
        {"path": "/a", "name": "A", "view": "a"},
        {"path": "/b", "name": "A", "view": "b"}
    ]"#;
    assert!(matches!(RouteTable::from_json(json), Err(RouteTableError::DuplicateName(_))));
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(RouteTable::from_json("{\"path\": 1}"), Err(RouteTableError::Parse(_))));
}

#[test]
fn view_id_serializes_as_plain_string() {
    let json = serde_json::to_string(&ViewId::new("EndPage")).unwrap();
    assert_eq!(json, "\"EndPage\"");
}
