//! Selection of interesting classes

use crate::common::{class_names, find_class, TestRepo};
use berray_doc::output::render;
use berray_doc::{
    extract_unit, parse_source_unit, DocConfig, KnownType, OutputFormat, SelectionFilter,
    SourceIndex,
};
use std::path::Path;

#[test]
fn test_unrelated_base_is_seen_but_not_kept() {
    let base = parse_source_unit(
        Path::new("org/lib/Widget.java"),
        "package org.lib; public class Widget {}",
    )
    .unwrap();
    let button = parse_source_unit(
        Path::new("org/lib/Button.java"),
        "package org.lib; public class Button extends Widget {}",
    )
    .unwrap();
    let index = SourceIndex::build([&base, &button], &[]);

    let finished = extract_unit(&button, &index).unwrap();
    assert_eq!(class_names(&finished), vec!["Button"]);
    assert_eq!(finished[0].ancestors, vec!["org.lib.Widget"]);

    let kept = SelectionFilter::default().apply(finished);
    assert!(kept.is_empty());
}

#[test]
fn test_classes_without_supertype_are_excluded() {
    let repo = TestRepo::with_berray_core();
    repo.add_java(
        "com/berray/util/Colors.java",
        "package com.berray.util; public class Colors { public static int rgb(int r, int g, int b) { return 0; } }",
    );

    let extraction = repo.extract().unwrap();
    assert!(extraction.classes.is_empty());
    assert_eq!(extraction.units, 4);
    assert_eq!(extraction.seen, 4);
}

#[test]
fn test_all_core_kinds_are_kept() {
    let repo = TestRepo::with_berray_core();
    repo.add_java(
        "com/berray/objects/Player.java",
        "package com.berray.objects; public class Player extends com.berray.GameObject {}",
    )
    .add_java(
        "com/berray/actions/Wait.java",
        "package com.berray.actions;\n\
         import com.berray.components.core.Action;\n\
         public class Wait implements Action {}",
    )
    .add_java(
        "com/berray/actions/Step.java",
        "package com.berray.actions; public interface Step extends com.berray.components.core.Action {}",
    );

    let extraction = repo.extract().unwrap();
    assert_eq!(class_names(&extraction.classes), vec!["Step", "Wait", "Player"]);
}

#[test]
fn test_configured_interesting_types_and_known_types() {
    let repo = TestRepo::new();
    repo.add_java(
        "game/Enemy.java",
        "package game;\n\
         import org.engine.Entity;\n\
         public class Enemy extends Entity {}",
    )
    .add_java("game/Rock.java", "package game; public class Rock {}");

    let config = DocConfig {
        interesting_base_types: vec!["org.engine.Node".to_string()],
        known_types: vec![
            KnownType {
                name: "org.engine.Node".to_string(),
                superclass: None,
                interfaces: Vec::new(),
                interface: false,
            },
            KnownType {
                name: "org.engine.Entity".to_string(),
                superclass: Some("org.engine.Node".to_string()),
                interfaces: Vec::new(),
                interface: false,
            },
        ],
        ..DocConfig::default()
    };

    let extraction = repo.extract_with(&config).unwrap();
    let enemy = find_class(&extraction.classes, "Enemy");
    assert_eq!(enemy.ancestors, vec!["org.engine.Entity", "org.engine.Node"]);
    assert_eq!(extraction.classes.len(), 1);
}

#[test]
fn test_extraction_is_idempotent() {
    let repo = TestRepo::with_berray_core();
    for name in ["Jump", "Body", "Area", "Sprite", "Timer"] {
        repo.add_java(
            &format!("com/berray/components/{}.java", name),
            &format!(
                "package com.berray.components;\n\
                 import com.berray.components.core.Component;\n\
                 /** The {name} component */\n\
                 public class {name} extends Component {{\n\
                   /** @type number */ public float value(String key, int index) {{ return 0; }}\n\
                 }}\n",
                name = name
            ),
        );
    }

    let first = render(&repo.extract().unwrap().classes, OutputFormat::Pretty).unwrap();
    let second = render(&repo.extract().unwrap().classes, OutputFormat::Pretty).unwrap();
    assert_eq!(first, second);
    assert!(first.contains("\"classJavaDoc\": \"The Area component\""));
}
