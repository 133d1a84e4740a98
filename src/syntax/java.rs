//! Java lowering
//!
//! Turns a tree-sitter-java syntax tree into [`Decl`]s. Declarations that
//! are not documented (constructors, fields, initializer blocks) are not
//! lowered themselves, but lambdas and local classes inside them are, so the
//! extraction walk sees every parameter and class in source order.

use tree_sitter::Node;

use super::common::{
    doc_comment, field_text, find_child, get_node_text, get_node_text_compact, modifier_keywords,
    named_children, type_parameter_names,
};
use super::{
    ClassDecl, ClassKind, Decl, ImportDecl, MethodDecl, PackageDecl, ParameterDecl,
    PrimitiveType, SupertypeClause, SupertypeRef, TypeName, TypeSyntax,
};

/// Node kinds that can appear where a type is expected
const TYPE_NODES: &[&str] = &[
    "type_identifier",
    "scoped_type_identifier",
    "generic_type",
    "array_type",
    "integral_type",
    "floating_point_type",
    "boolean_type",
    "void_type",
    "annotated_type",
];

/// Lower the root `program` node
pub fn lower_program(root: &Node, source: &str) -> Vec<Decl> {
    let mut decls = Vec::new();
    for child in named_children(root) {
        match child.kind() {
            "package_declaration" => {
                if let Some(package) = lower_package(&child, source) {
                    decls.push(Decl::Package(package));
                }
            }
            "import_declaration" => {
                if let Some(import) = lower_import(&child, source) {
                    decls.push(Decl::Import(import));
                }
            }
            kind if class_kind(kind).is_some() => {
                if let Some(class) = lower_type_declaration(&child, source) {
                    decls.push(Decl::Class(class));
                }
            }
            _ => {}
        }
    }
    decls
}

fn class_kind(node_kind: &str) -> Option<ClassKind> {
    match node_kind {
        "class_declaration" => Some(ClassKind::Class),
        "interface_declaration" => Some(ClassKind::Interface),
        "enum_declaration" => Some(ClassKind::Enum),
        "record_declaration" => Some(ClassKind::Record),
        "annotation_type_declaration" => Some(ClassKind::Annotation),
        _ => None,
    }
}

fn is_type_node(node: &Node) -> bool {
    TYPE_NODES.contains(&node.kind())
}

// ============================================================================
// Package and imports
// ============================================================================

fn lower_package(node: &Node, source: &str) -> Option<PackageDecl> {
    let name = named_children(node)
        .into_iter()
        .find(|child| matches!(child.kind(), "scoped_identifier" | "identifier"))?;
    Some(PackageDecl {
        name: get_node_text_compact(&name, source),
    })
}

fn lower_import(node: &Node, source: &str) -> Option<ImportDecl> {
    let name = named_children(node)
        .into_iter()
        .find(|child| matches!(child.kind(), "scoped_identifier" | "identifier"))?;
    Some(ImportDecl {
        path: get_node_text_compact(&name, source),
        is_static: find_child(node, "static").is_some(),
        on_demand: find_child(node, "asterisk").is_some(),
    })
}

// ============================================================================
// Types and members
// ============================================================================

fn lower_type_declaration(node: &Node, source: &str) -> Option<ClassDecl> {
    let kind = class_kind(node.kind())?;
    let name = field_text(node, "name", source)?;

    let mut members = Vec::new();
    lower_supertypes(node, source, &mut members);
    if let Some(body) = node.child_by_field_name("body") {
        lower_body_members(&body, source, &mut members);
    }

    Some(ClassDecl {
        name,
        kind,
        doc: doc_comment(node, source),
        type_parameters: type_parameter_names(node, source),
        members,
    })
}

/// `extends` first, then each entry of `implements` / interface `extends`
fn lower_supertypes(node: &Node, source: &str, members: &mut Vec<Decl>) {
    if let Some(superclass) = node
        .child_by_field_name("superclass")
        .or_else(|| find_child(node, "superclass"))
    {
        if let Some(ty) = named_children(&superclass).into_iter().find(is_type_node) {
            members.push(Decl::Supertype(SupertypeRef {
                clause: SupertypeClause::Extends,
                name: type_name(&ty, source),
            }));
        }
    }

    for (list_kind, clause) in [
        ("super_interfaces", SupertypeClause::Implements),
        ("extends_interfaces", SupertypeClause::Extends),
    ] {
        let Some(list) = find_child(node, list_kind) else {
            continue;
        };
        for ty in interface_types(&list) {
            members.push(Decl::Supertype(SupertypeRef {
                clause,
                name: type_name(&ty, source),
            }));
        }
    }
}

/// Types listed in a `super_interfaces` / `extends_interfaces` node
fn interface_types<'t>(list: &Node<'t>) -> Vec<Node<'t>> {
    let mut types = Vec::new();
    for child in named_children(list) {
        if child.kind() == "type_list" {
            types.extend(named_children(&child).into_iter().filter(is_type_node));
        } else if is_type_node(&child) {
            types.push(child);
        }
    }
    types
}

fn lower_body_members(body: &Node, source: &str, members: &mut Vec<Decl>) {
    for child in named_children(body) {
        match child.kind() {
            "method_declaration" => {
                if let Some(method) = lower_method(&child, source) {
                    members.push(Decl::Method(method));
                }
            }
            kind if class_kind(kind).is_some() => {
                if let Some(class) = lower_type_declaration(&child, source) {
                    members.push(Decl::Class(class));
                }
            }
            "enum_body_declarations" => lower_body_members(&child, source, members),
            // Constant bodies are anonymous classes
            "enum_constant" => {}
            "field_declaration"
            | "constant_declaration"
            | "constructor_declaration"
            | "compact_constructor_declaration"
            | "block"
            | "static_initializer" => collect_nested(&child, source, members),
            _ => {}
        }
    }
}

fn lower_method(node: &Node, source: &str) -> Option<MethodDecl> {
    let name = field_text(node, "name", source)?;

    let mut members = Vec::new();
    if let Some(parameters) = node.child_by_field_name("parameters") {
        lower_formal_parameters(&parameters, source, &mut members);
    }
    if let Some(body) = node.child_by_field_name("body") {
        collect_nested(&body, source, &mut members);
    }

    Some(MethodDecl {
        name,
        doc: doc_comment(node, source),
        modifiers: modifier_keywords(node, source),
        type_parameters: type_parameter_names(node, source),
        members,
    })
}

// ============================================================================
// Parameters
// ============================================================================

fn lower_formal_parameters(node: &Node, source: &str, out: &mut Vec<Decl>) {
    for child in named_children(node) {
        let parameter = match child.kind() {
            "formal_parameter" => lower_formal_parameter(&child, source),
            "spread_parameter" => lower_spread_parameter(&child, source),
            _ => None,
        };
        if let Some(parameter) = parameter {
            out.push(Decl::Parameter(parameter));
        }
    }
}

fn lower_formal_parameter(node: &Node, source: &str) -> Option<ParameterDecl> {
    let name = field_text(node, "name", source)?;
    let ty = match node.child_by_field_name("type") {
        Some(ty) => lower_type(&ty, source),
        None => TypeSyntax::Inferred,
    };
    // C-style array declarator: `String args[]`
    let ty = match node.child_by_field_name("dimensions") {
        Some(dimensions) => wrap_array(ty, count_dimensions(&dimensions, source)),
        None => ty,
    };
    Some(ParameterDecl { name, ty })
}

/// `Type... name` is documented with its element type
fn lower_spread_parameter(node: &Node, source: &str) -> Option<ParameterDecl> {
    let ty = named_children(node).into_iter().find(is_type_node)?;
    let name = field_text(node, "name", source).or_else(|| {
        find_child(node, "variable_declarator")
            .and_then(|declarator| field_text(&declarator, "name", source))
    })?;
    Some(ParameterDecl {
        name,
        ty: lower_type(&ty, source),
    })
}

fn lower_lambda_parameters(node: &Node, source: &str, out: &mut Vec<Decl>) {
    let Some(parameters) = node.child_by_field_name("parameters") else {
        return;
    };
    match parameters.kind() {
        "identifier" => out.push(Decl::Parameter(ParameterDecl {
            name: get_node_text(&parameters, source),
            ty: TypeSyntax::Inferred,
        })),
        "inferred_parameters" => {
            for name in named_children(&parameters) {
                if name.kind() == "identifier" {
                    out.push(Decl::Parameter(ParameterDecl {
                        name: get_node_text(&name, source),
                        ty: TypeSyntax::Inferred,
                    }));
                }
            }
        }
        "formal_parameters" => lower_formal_parameters(&parameters, source, out),
        _ => {}
    }
}

/// Scan a code region for lambda parameters and local classes.
/// Anonymous class bodies are skipped.
fn collect_nested(node: &Node, source: &str, out: &mut Vec<Decl>) {
    for child in named_children(node) {
        visit_nested(&child, source, out);
    }
}

fn visit_nested(node: &Node, source: &str, out: &mut Vec<Decl>) {
    match node.kind() {
        "lambda_expression" => {
            lower_lambda_parameters(node, source, out);
            if let Some(body) = node.child_by_field_name("body") {
                visit_nested(&body, source, out);
            }
        }
        kind if class_kind(kind).is_some() => {
            if let Some(class) = lower_type_declaration(node, source) {
                out.push(Decl::Class(class));
            }
        }
        "class_body" => {}
        _ => collect_nested(node, source, out),
    }
}

// ============================================================================
// Type syntax
// ============================================================================

fn lower_type(node: &Node, source: &str) -> TypeSyntax {
    match node.kind() {
        "integral_type" | "floating_point_type" | "boolean_type" => {
            let keyword = get_node_text_compact(node, source);
            match PrimitiveType::from_keyword(&keyword) {
                Some(primitive) => TypeSyntax::Primitive(primitive),
                None => TypeSyntax::Named(TypeName::parse(&keyword)),
            }
        }
        "type_identifier" if get_node_text(node, source) == "var" => TypeSyntax::Inferred,
        "type_identifier" | "scoped_type_identifier" | "generic_type" => {
            TypeSyntax::Named(type_name(node, source))
        }
        "array_type" => {
            let element = match node.child_by_field_name("element") {
                Some(element) => lower_type(&element, source),
                None => TypeSyntax::Inferred,
            };
            let dimensions = node
                .child_by_field_name("dimensions")
                .map(|dimensions| count_dimensions(&dimensions, source))
                .unwrap_or(1);
            wrap_array(element, dimensions)
        }
        "annotated_type" => match named_children(node).into_iter().rfind(is_type_node) {
            Some(inner) => lower_type(&inner, source),
            None => TypeSyntax::Named(TypeName::parse(&get_node_text_compact(node, source))),
        },
        _ => TypeSyntax::Named(TypeName::parse(&get_node_text_compact(node, source))),
    }
}

fn wrap_array(element: TypeSyntax, dimensions: usize) -> TypeSyntax {
    match element {
        TypeSyntax::Array {
            element,
            dimensions: inner,
        } => TypeSyntax::Array {
            element,
            dimensions: inner + dimensions,
        },
        element => TypeSyntax::Array {
            element: Box::new(element),
            dimensions,
        },
    }
}

fn count_dimensions(node: &Node, source: &str) -> usize {
    get_node_text(node, source).matches('[').count().max(1)
}

/// Flatten a type node into its dotted name, dropping type arguments and
/// annotations (`java.util.Map.Entry<K, V>` -> `java.util.Map.Entry`)
fn type_name(node: &Node, source: &str) -> TypeName {
    let mut segments = Vec::new();
    type_name_segments(node, source, &mut segments);
    TypeName { segments }
}

fn type_name_segments(node: &Node, source: &str, out: &mut Vec<String>) {
    match node.kind() {
        "type_identifier" | "identifier" => out.push(get_node_text(node, source)),
        "scoped_type_identifier" | "generic_type" => {
            for child in named_children(node) {
                if matches!(
                    child.kind(),
                    "type_identifier" | "identifier" | "scoped_type_identifier" | "generic_type"
                ) {
                    type_name_segments(&child, source, out);
                }
            }
        }
        "annotated_type" => {
            if let Some(inner) = named_children(node).into_iter().rfind(is_type_node) {
                type_name_segments(&inner, source, out);
            }
        }
        _ => out.extend(TypeName::parse(&get_node_text_compact(node, source)).segments),
    }
}
