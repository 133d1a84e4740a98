//! Methods, comments and parameter types

use crate::common::{find_class, find_method, TestRepo};

const JUMP: &str = "package com.berray.components;\n\
    \n\
    import com.berray.components.core.Component;\n\
    \n\
    class Jump extends Component {\n\
      /** does a jump \n @type number */\n\
      public void apply(float force) {}\n\
    }\n";

#[test]
fn test_jump_end_to_end() {
    let repo = TestRepo::with_berray_core();
    repo.add_java("com/berray/components/Jump.java", JUMP);

    let extraction = repo.extract().unwrap();
    assert_eq!(extraction.classes.len(), 1);

    let jump = find_class(&extraction.classes, "Jump");
    assert_eq!(jump.ancestors, vec!["com.berray.components.core.Component"]);
    assert_eq!(jump.methods.len(), 1);

    let apply = find_method(jump, "apply");
    assert_eq!(apply.description.as_deref(), Some("does a jump"));
    assert_eq!(apply.explicit_type.as_deref(), Some("number"));
    assert_eq!(apply.modifiers, vec!["public"]);
    assert_eq!(apply.parameters.len(), 1);
    assert_eq!(apply.parameters[0].name, "force");
    assert_eq!(
        apply.parameters[0].resolved_type.as_deref(),
        Some("java.lang.Float")
    );
}

#[test]
fn test_comments_and_type_tags() {
    let repo = TestRepo::with_berray_core();
    repo.add_java(
        "com/berray/components/Pos.java",
        "package com.berray.components;\n\
         import com.berray.components.core.Component;\n\
         /**\n\
          * Position of an object.\n\
          * @author someone\n\
          */\n\
         public class Pos extends Component {\n\
           public void plain() {}\n\
           /**\n\
            * Current position.\n\
            * @return the position\n\
            * @type Vec2\n\
            * @type ignored\n\
            */\n\
           public Object pos() { return null; }\n\
           /** @type */\n\
           protected static final void emptyTag() {}\n\
         }",
    );

    let extraction = repo.extract().unwrap();
    let pos = find_class(&extraction.classes, "Pos");
    assert_eq!(pos.description.as_deref(), Some("Position of an object."));

    let plain = find_method(pos, "plain");
    assert!(plain.description.is_none());
    assert!(plain.explicit_type.is_none());

    let accessor = find_method(pos, "pos");
    assert_eq!(accessor.description.as_deref(), Some("Current position."));
    assert_eq!(accessor.explicit_type.as_deref(), Some("Vec2"));

    let empty = find_method(pos, "emptyTag");
    assert!(empty.explicit_type.is_none());
    assert!(empty.description.is_none());
    assert_eq!(empty.modifiers, vec!["protected", "static", "final"]);
}

#[test]
fn test_parameter_type_names() {
    let repo = TestRepo::with_berray_core();
    repo.add_java(
        "com/berray/math/Vec2.java",
        "package com.berray.math; public class Vec2 {}",
    )
    .add_java(
        "com/berray/components/Move.java",
        "package com.berray.components;\n\
         import com.berray.components.core.Component;\n\
         import com.berray.math.Vec2;\n\
         import java.util.List;\n\
         public class Move<T> extends Component {\n\
           public void to(Vec2 target, double speed, boolean relative, char key) {}\n\
           public void path(List<Vec2> points, Vec2[] waypoints, String... tags) {}\n\
           public <V> void with(T owner, V value, java.util.function.Consumer<Move<T>> done) {}\n\
         }",
    );

    let extraction = repo.extract().unwrap();
    let class = find_class(&extraction.classes, "Move");
    let types = |method: &str| -> Vec<Option<String>> {
        find_method(class, method)
            .parameters
            .iter()
            .map(|p| p.resolved_type.clone())
            .collect()
    };

    assert_eq!(
        types("to"),
        vec![
            Some("com.berray.math.Vec2".to_string()),
            Some("java.lang.Double".to_string()),
            Some("java.lang.Boolean".to_string()),
            Some("java.lang.Character".to_string()),
        ]
    );
    assert_eq!(
        types("path"),
        vec![
            Some("java.util.List".to_string()),
            Some("unknown: com.berray.math.Vec2[]".to_string()),
            Some("java.lang.String".to_string()),
        ]
    );
    assert_eq!(
        types("with"),
        vec![
            Some("unknown: typevar T".to_string()),
            Some("unknown: typevar V".to_string()),
            Some("java.util.function.Consumer".to_string()),
        ]
    );
}

#[test]
fn test_placeholder_parameters_have_no_type() {
    let repo = TestRepo::with_berray_core();
    repo.add_java(
        "com/berray/components/Timer.java",
        "package com.berray.components;\n\
         import com.berray.components.core.Component;\n\
         public class Timer extends Component {\n\
           public void every(float seconds, Runnable action) {\n\
             java.util.function.BiFunction<Integer, Integer, Integer> sum = (a, b) -> a + b;\n\
             java.util.function.Function<String, String> id = (var s) -> s;\n\
           }\n\
         }",
    );

    let extraction = repo.extract().unwrap();
    let every = find_method(find_class(&extraction.classes, "Timer"), "every");
    let params: Vec<_> = every
        .parameters
        .iter()
        .map(|p| (p.name.as_str(), p.resolved_type.as_deref()))
        .collect();
    assert_eq!(
        params,
        vec![
            ("seconds", Some("java.lang.Float")),
            ("action", Some("java.lang.Runnable")),
            ("a", None),
            ("b", None),
            ("s", None),
        ]
    );

    let json = serde_json::to_value(every).unwrap();
    assert!(json["parameters"][2].get("type").is_none());
}

#[test]
fn test_lambdas_outside_methods_attach_to_latest_method() {
    let repo = TestRepo::with_berray_core();
    repo.add_java(
        "com/berray/components/Hook.java",
        "package com.berray.components;\n\
         import com.berray.components.core.Component;\n\
         public class Hook extends Component {\n\
           private final java.util.function.Consumer<String> early = first -> {};\n\
           public void before(int x) {}\n\
           private final java.util.function.Consumer<String> sink = message -> {};\n\
           public Hook(int size) { Runnable r = () -> {}; java.util.function.IntFunction<String> f = n -> \"\"; }\n\
           public void after() {}\n\
         }",
    );

    let extraction = repo.extract().unwrap();
    let hook = find_class(&extraction.classes, "Hook");
    let names: Vec<_> = hook.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["before", "after"]);

    let before: Vec<_> = find_method(hook, "before")
        .parameters
        .iter()
        .map(|p| (p.name.as_str(), p.resolved_type.as_deref()))
        .collect();
    assert_eq!(
        before,
        vec![
            ("x", Some("java.lang.Integer")),
            ("message", None),
            ("n", None),
        ]
    );
    assert!(find_method(hook, "after").parameters.is_empty());
}
