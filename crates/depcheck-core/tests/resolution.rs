use depcheck_core::resolution::{DependencyNode, DependencySnapshot};

const BUILD_SNAPSHOT: &str = r#"
{
  "projects": [
    {
      "name": "app",
      "configurations": [
        {
          "name": "runtimeClasspath",
          "dependencies": [
            "org.example:lib-x:1.0",
            {
              "group": "org.example",
              "artifact": "lib-y",
              "version": "2.1",
              "dependencies": ["org.example:lib-z:3.0"]
            }
          ]
        }
      ]
    }
  ]
}
"#;

#[test]
fn parse_build_snapshot() {
    let snapshot = DependencySnapshot::parse_json(BUILD_SNAPSHOT).unwrap();
    assert_eq!(snapshot.projects.len(), 1);

    let project = &snapshot.projects[0];
    assert_eq!(project.name, "app");
    assert_eq!(project.configurations.len(), 1);

    let configuration = &project.configurations[0];
    assert_eq!(configuration.name, "runtimeClasspath");
    assert!(configuration.resolvable);
    assert_eq!(configuration.dependencies.len(), 2);
}

#[test]
fn parse_single_project_snapshot() {
    let json = r#"{"name": "app", "configurations": []}"#;
    let snapshot = DependencySnapshot::parse_json(json).unwrap();
    assert_eq!(snapshot.projects.len(), 1);
    assert_eq!(snapshot.projects[0].name, "app");
}

#[test]
fn parse_rejects_malformed_json() {
    let err = DependencySnapshot::parse_json("{not json").unwrap_err();
    assert!(err.to_string().contains("Failed to parse snapshot"));
}

#[test]
fn shorthand_node_is_resolved_leaf() {
    let snapshot = DependencySnapshot::parse_json(BUILD_SNAPSHOT).unwrap();
    let node = &snapshot.projects[0].configurations[0].dependencies[0];

    assert!(node.is_resolved());
    assert!(node.children().is_empty());

    let coord = node.coordinate().unwrap();
    assert_eq!(coord.to_string(), "org.example:lib-x:1.0");
}

#[test]
fn detailed_node_exposes_coordinate_and_children() {
    let snapshot = DependencySnapshot::parse_json(BUILD_SNAPSHOT).unwrap();
    let node = &snapshot.projects[0].configurations[0].dependencies[1];

    assert!(node.is_resolved());
    let coord = node.coordinate().unwrap();
    assert_eq!(coord.to_string(), "org.example:lib-y:2.1");

    assert_eq!(node.children().len(), 1);
    let child = node.children()[0].coordinate().unwrap();
    assert_eq!(child.to_string(), "org.example:lib-z:3.0");
}

#[test]
fn unresolved_node_has_no_coordinate() {
    let json = r#"
    {
      "name": "app",
      "configurations": [
        {
          "name": "runtimeClasspath",
          "dependencies": [
            {"resolved": false, "requested": "org.example:gone:1.+"}
          ]
        }
      ]
    }
    "#;
    let snapshot = DependencySnapshot::parse_json(json).unwrap();
    let node = &snapshot.projects[0].configurations[0].dependencies[0];

    assert!(!node.is_resolved());
    assert!(node.coordinate().is_none());
    match node {
        DependencyNode::Detailed(detailed) => {
            assert_eq!(detailed.requested.as_deref(), Some("org.example:gone:1.+"));
        }
        DependencyNode::Short(_) => panic!("expected detailed node"),
    }
}

#[test]
fn empty_coordinate_parts_yield_no_coordinate() {
    let json = r#"
    {
      "name": "app",
      "configurations": [
        {
          "name": "runtimeClasspath",
          "dependencies": [
            {"group": "", "artifact": "lib", "version": "1.0"},
            {"group": "org.example", "artifact": "lib", "dependencies": ["org.example:child:1.0"]}
          ]
        }
      ]
    }
    "#;
    let snapshot = DependencySnapshot::parse_json(json).unwrap();
    let deps = &snapshot.projects[0].configurations[0].dependencies;

    // Empty and missing parts both disqualify the coordinate, but the
    // node itself still parses and keeps its children.
    assert!(deps[0].coordinate().is_none());
    assert!(deps[1].coordinate().is_none());
    assert_eq!(deps[1].children().len(), 1);
}

#[test]
fn unresolvable_configuration_flag_parses() {
    let json = r#"
    {
      "name": "app",
      "configurations": [
        {"name": "zinc", "resolvable": false}
      ]
    }
    "#;
    let snapshot = DependencySnapshot::parse_json(json).unwrap();
    let configuration = &snapshot.projects[0].configurations[0];
    assert!(!configuration.resolvable);
    assert!(configuration.dependencies.is_empty());
}

#[test]
fn project_without_configurations_parses() {
    let json = r#"{"projects": [{"name": "empty"}]}"#;
    let snapshot = DependencySnapshot::parse_json(json).unwrap();
    assert!(snapshot.projects[0].configurations.is_empty());
}
