//! Qualified names and ancestor chains

use crate::common::{assert_no_root_type, class_names, find_class, TestRepo};
use berray_doc::{extract_unit, parse_source_unit, DocConfig, SourceIndex};
use std::path::Path;

fn config_for(types: &[&str]) -> DocConfig {
    DocConfig {
        interesting_base_types: types.iter().map(|t| t.to_string()).collect(),
        ..DocConfig::default()
    }
}

#[test]
fn test_nested_class_names_outer_to_inner() {
    let unit = parse_source_unit(
        Path::new("C.java"),
        "package deep;\n\
         class C {\n\
           class B {\n\
             class A {\n\
               class Z {}\n\
             }\n\
           }\n\
           static class Sibling {}\n\
         }",
    )
    .unwrap();
    let index = SourceIndex::build([&unit], &[]);
    let classes = extract_unit(&unit, &index).unwrap();
    assert_eq!(
        class_names(&classes),
        vec!["C.B.A.Z", "C.B.A", "C.B", "C.Sibling", "C"]
    );
}

#[test]
fn test_transitive_component_chain() {
    let repo = TestRepo::with_berray_core();
    repo.add_java(
        "com/berray/components/Physics.java",
        "package com.berray.components;\n\
         import com.berray.components.core.Component;\n\
         public class Physics extends Component {}",
    )
    .add_java(
        "com/berray/components/Jump.java",
        "package com.berray.components;\n\
         public class Jump extends Physics {}",
    );

    let extraction = repo.extract().unwrap();
    let jump = find_class(&extraction.classes, "Jump");
    assert_eq!(
        jump.ancestors,
        vec![
            "com.berray.components.Physics",
            "com.berray.components.core.Component",
        ]
    );
    assert_no_root_type(&extraction.classes);
}

#[test]
fn test_root_type_never_reported() {
    let repo = TestRepo::new();
    repo.add_java("x/Base.java", "package x; public class Base extends Object {}")
        .add_java("x/Mid.java", "package x; public class Mid extends Base implements Runnable {}")
        .add_java("x/Leaf.java", "package x; public class Leaf extends Mid {}")
        .add_java("x/Explicit.java", "package x; public class Explicit extends java.lang.Object {}");

    let extraction = repo
        .extract_with(&config_for(&["x.Base", "java.lang.Object"]))
        .unwrap();
    let names = class_names(&extraction.classes);
    assert_eq!(names, vec!["Leaf", "Mid"]);
    assert_eq!(
        find_class(&extraction.classes, "Leaf").ancestors,
        vec!["x.Mid", "x.Base", "java.lang.Runnable"]
    );
    assert_no_root_type(&extraction.classes);
}

#[test]
fn test_interfaces_follow_superclass() {
    let repo = TestRepo::with_berray_core();
    repo.add_java(
        "com/berray/objects/Player.java",
        "package com.berray.objects;\n\
         import com.berray.GameObject;\n\
         import com.berray.components.core.*;\n\
         public class Player extends GameObject implements Action, java.io.Serializable {}",
    );

    let extraction = repo.extract().unwrap();
    let player = find_class(&extraction.classes, "Player");
    assert_eq!(
        player.ancestors,
        vec![
            "com.berray.GameObject",
            "com.berray.components.core.Action",
            "java.io.Serializable",
        ]
    );
}

#[test]
fn test_duplicates_are_kept() {
    let repo = TestRepo::new();
    repo.add_java("d/Tag.java", "package d; public interface Tag {}")
        .add_java("d/Base.java", "package d; public class Base implements Tag {}")
        .add_java("d/Twice.java", "package d; public class Twice extends Base implements Tag {}");

    let extraction = repo.extract_with(&config_for(&["d.Tag"])).unwrap();
    let twice = find_class(&extraction.classes, "Twice");
    assert_eq!(twice.ancestors, vec!["d.Base", "d.Tag", "d.Tag"]);
}

#[test]
fn test_nested_component_inherits_through_outer_scope() {
    let repo = TestRepo::with_berray_core();
    repo.add_java(
        "com/berray/components/Shapes.java",
        "package com.berray.components;\n\
         import com.berray.components.core.Component;\n\
         public class Shapes {\n\
           public static class Shape extends Component {}\n\
           public static class Circle extends Shape {}\n\
         }",
    );

    let extraction = repo.extract().unwrap();
    assert_eq!(class_names(&extraction.classes), vec!["Shapes.Shape", "Shapes.Circle"]);
    assert_eq!(
        find_class(&extraction.classes, "Shapes.Circle").ancestors,
        vec![
            "com.berray.components.Shapes.Shape",
            "com.berray.components.core.Component",
        ]
    );
}
