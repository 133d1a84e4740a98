//! Core JDK types known without sources
//!
//! Only the hierarchy matters here: each entry is the type, its kind, its
//! superclass (implicit `java.lang.Object` when `None` for classes) and its
//! direct interfaces.

use crate::syntax::ClassKind;

use ClassKind::{Annotation, Class, Interface};

pub type JdkEntry = (
    &'static str,
    ClassKind,
    Option<&'static str>,
    &'static [&'static str],
);

const SERIALIZABLE: &str = "java.io.Serializable";
const COMPARABLE: &str = "java.lang.Comparable";
const CLONEABLE: &str = "java.lang.Cloneable";

pub const JDK_TYPES: &[JdkEntry] = &[
    // java.lang
    ("java.lang.Object", Class, None, &[]),
    ("java.lang.String", Class, None, &[SERIALIZABLE, COMPARABLE, "java.lang.CharSequence"]),
    ("java.lang.CharSequence", Interface, None, &[]),
    ("java.lang.Comparable", Interface, None, &[]),
    ("java.lang.Iterable", Interface, None, &[]),
    ("java.lang.Runnable", Interface, None, &[]),
    ("java.lang.AutoCloseable", Interface, None, &[]),
    ("java.lang.Cloneable", Interface, None, &[]),
    ("java.lang.Number", Class, None, &[SERIALIZABLE]),
    ("java.lang.Boolean", Class, None, &[SERIALIZABLE, COMPARABLE]),
    ("java.lang.Character", Class, None, &[SERIALIZABLE, COMPARABLE]),
    ("java.lang.Byte", Class, Some("java.lang.Number"), &[COMPARABLE]),
    ("java.lang.Short", Class, Some("java.lang.Number"), &[COMPARABLE]),
    ("java.lang.Integer", Class, Some("java.lang.Number"), &[COMPARABLE]),
    ("java.lang.Long", Class, Some("java.lang.Number"), &[COMPARABLE]),
    ("java.lang.Float", Class, Some("java.lang.Number"), &[COMPARABLE]),
    ("java.lang.Double", Class, Some("java.lang.Number"), &[COMPARABLE]),
    ("java.lang.Void", Class, None, &[]),
    ("java.lang.Enum", Class, None, &[COMPARABLE, SERIALIZABLE]),
    ("java.lang.Record", Class, None, &[]),
    ("java.lang.Class", Class, None, &[SERIALIZABLE]),
    ("java.lang.Math", Class, None, &[]),
    ("java.lang.System", Class, None, &[]),
    ("java.lang.StringBuilder", Class, None, &[SERIALIZABLE, "java.lang.CharSequence"]),
    ("java.lang.Thread", Class, None, &["java.lang.Runnable"]),
    ("java.lang.Throwable", Class, None, &[SERIALIZABLE]),
    ("java.lang.Exception", Class, Some("java.lang.Throwable"), &[]),
    ("java.lang.Error", Class, Some("java.lang.Throwable"), &[]),
    ("java.lang.RuntimeException", Class, Some("java.lang.Exception"), &[]),
    ("java.lang.IllegalArgumentException", Class, Some("java.lang.RuntimeException"), &[]),
    ("java.lang.IllegalStateException", Class, Some("java.lang.RuntimeException"), &[]),
    ("java.lang.UnsupportedOperationException", Class, Some("java.lang.RuntimeException"), &[]),
    ("java.lang.Override", Annotation, None, &[]),
    ("java.lang.Deprecated", Annotation, None, &[]),
    ("java.lang.FunctionalInterface", Annotation, None, &[]),
    ("java.lang.SuppressWarnings", Annotation, None, &[]),
    // java.io
    ("java.io.Serializable", Interface, None, &[]),
    ("java.io.Closeable", Interface, None, &["java.lang.AutoCloseable"]),
    // java.util
    ("java.util.Collection", Interface, None, &["java.lang.Iterable"]),
    ("java.util.List", Interface, None, &["java.util.Collection"]),
    ("java.util.Set", Interface, None, &["java.util.Collection"]),
    ("java.util.SortedSet", Interface, None, &["java.util.Set"]),
    ("java.util.NavigableSet", Interface, None, &["java.util.SortedSet"]),
    ("java.util.Queue", Interface, None, &["java.util.Collection"]),
    ("java.util.Deque", Interface, None, &["java.util.Queue"]),
    ("java.util.Map", Interface, None, &[]),
    ("java.util.Map.Entry", Interface, None, &[]),
    ("java.util.SortedMap", Interface, None, &["java.util.Map"]),
    ("java.util.NavigableMap", Interface, None, &["java.util.SortedMap"]),
    ("java.util.Iterator", Interface, None, &[]),
    ("java.util.ListIterator", Interface, None, &["java.util.Iterator"]),
    ("java.util.Comparator", Interface, None, &[]),
    ("java.util.RandomAccess", Interface, None, &[]),
    ("java.util.AbstractCollection", Class, None, &["java.util.Collection"]),
    ("java.util.AbstractList", Class, Some("java.util.AbstractCollection"), &["java.util.List"]),
    ("java.util.AbstractSet", Class, Some("java.util.AbstractCollection"), &["java.util.Set"]),
    ("java.util.AbstractQueue", Class, Some("java.util.AbstractCollection"), &["java.util.Queue"]),
    ("java.util.AbstractMap", Class, None, &["java.util.Map"]),
    ("java.util.ArrayList", Class, Some("java.util.AbstractList"), &["java.util.List", "java.util.RandomAccess", CLONEABLE, SERIALIZABLE]),
    ("java.util.LinkedList", Class, Some("java.util.AbstractList"), &["java.util.List", "java.util.Deque", CLONEABLE, SERIALIZABLE]),
    ("java.util.Vector", Class, Some("java.util.AbstractList"), &["java.util.List", "java.util.RandomAccess", CLONEABLE, SERIALIZABLE]),
    ("java.util.Stack", Class, Some("java.util.Vector"), &[]),
    ("java.util.ArrayDeque", Class, Some("java.util.AbstractCollection"), &["java.util.Deque", CLONEABLE, SERIALIZABLE]),
    ("java.util.PriorityQueue", Class, Some("java.util.AbstractQueue"), &[SERIALIZABLE]),
    ("java.util.HashMap", Class, Some("java.util.AbstractMap"), &["java.util.Map", CLONEABLE, SERIALIZABLE]),
    ("java.util.LinkedHashMap", Class, Some("java.util.HashMap"), &["java.util.Map"]),
    ("java.util.TreeMap", Class, Some("java.util.AbstractMap"), &["java.util.NavigableMap", CLONEABLE, SERIALIZABLE]),
    ("java.util.EnumMap", Class, Some("java.util.AbstractMap"), &[SERIALIZABLE, CLONEABLE]),
    ("java.util.IdentityHashMap", Class, Some("java.util.AbstractMap"), &["java.util.Map", SERIALIZABLE, CLONEABLE]),
    ("java.util.WeakHashMap", Class, Some("java.util.AbstractMap"), &["java.util.Map"]),
    ("java.util.Dictionary", Class, None, &[]),
    ("java.util.Hashtable", Class, Some("java.util.Dictionary"), &["java.util.Map", CLONEABLE, SERIALIZABLE]),
    ("java.util.Properties", Class, Some("java.util.Hashtable"), &[]),
    ("java.util.HashSet", Class, Some("java.util.AbstractSet"), &["java.util.Set", CLONEABLE, SERIALIZABLE]),
    ("java.util.LinkedHashSet", Class, Some("java.util.HashSet"), &["java.util.Set", CLONEABLE, SERIALIZABLE]),
    ("java.util.TreeSet", Class, Some("java.util.AbstractSet"), &["java.util.NavigableSet", CLONEABLE, SERIALIZABLE]),
    ("java.util.EnumSet", Class, Some("java.util.AbstractSet"), &[CLONEABLE, SERIALIZABLE]),
    ("java.util.BitSet", Class, None, &[CLONEABLE, SERIALIZABLE]),
    ("java.util.Optional", Class, None, &[]),
    ("java.util.OptionalInt", Class, None, &[]),
    ("java.util.OptionalLong", Class, None, &[]),
    ("java.util.OptionalDouble", Class, None, &[]),
    ("java.util.Objects", Class, None, &[]),
    ("java.util.Arrays", Class, None, &[]),
    ("java.util.Collections", Class, None, &[]),
    ("java.util.Random", Class, None, &[SERIALIZABLE]),
    ("java.util.UUID", Class, None, &[SERIALIZABLE, COMPARABLE]),
    ("java.util.Locale", Class, None, &[CLONEABLE, SERIALIZABLE]),
    ("java.util.Scanner", Class, None, &["java.util.Iterator", "java.io.Closeable"]),
    ("java.util.StringJoiner", Class, None, &[]),
    // java.util.function
    ("java.util.function.BiConsumer", Interface, None, &[]),
    ("java.util.function.BiFunction", Interface, None, &[]),
    ("java.util.function.BiPredicate", Interface, None, &[]),
    ("java.util.function.BooleanSupplier", Interface, None, &[]),
    ("java.util.function.Consumer", Interface, None, &[]),
    ("java.util.function.DoubleBinaryOperator", Interface, None, &[]),
    ("java.util.function.DoubleConsumer", Interface, None, &[]),
    ("java.util.function.DoubleFunction", Interface, None, &[]),
    ("java.util.function.DoublePredicate", Interface, None, &[]),
    ("java.util.function.DoubleSupplier", Interface, None, &[]),
    ("java.util.function.DoubleToIntFunction", Interface, None, &[]),
    ("java.util.function.DoubleToLongFunction", Interface, None, &[]),
    ("java.util.function.DoubleUnaryOperator", Interface, None, &[]),
    ("java.util.function.Function", Interface, None, &[]),
    ("java.util.function.IntBinaryOperator", Interface, None, &[]),
    ("java.util.function.IntConsumer", Interface, None, &[]),
    ("java.util.function.IntFunction", Interface, None, &[]),
    ("java.util.function.IntPredicate", Interface, None, &[]),
    ("java.util.function.IntSupplier", Interface, None, &[]),
    ("java.util.function.IntToDoubleFunction", Interface, None, &[]),
    ("java.util.function.IntToLongFunction", Interface, None, &[]),
    ("java.util.function.IntUnaryOperator", Interface, None, &[]),
    ("java.util.function.LongBinaryOperator", Interface, None, &[]),
    ("java.util.function.LongConsumer", Interface, None, &[]),
    ("java.util.function.LongFunction", Interface, None, &[]),
    ("java.util.function.LongPredicate", Interface, None, &[]),
    ("java.util.function.LongSupplier", Interface, None, &[]),
    ("java.util.function.LongToDoubleFunction", Interface, None, &[]),
    ("java.util.function.LongToIntFunction", Interface, None, &[]),
    ("java.util.function.LongUnaryOperator", Interface, None, &[]),
    ("java.util.function.ObjDoubleConsumer", Interface, None, &[]),
    ("java.util.function.ObjIntConsumer", Interface, None, &[]),
    ("java.util.function.ObjLongConsumer", Interface, None, &[]),
    ("java.util.function.Predicate", Interface, None, &[]),
    ("java.util.function.Supplier", Interface, None, &[]),
    ("java.util.function.ToDoubleBiFunction", Interface, None, &[]),
    ("java.util.function.ToDoubleFunction", Interface, None, &[]),
    ("java.util.function.ToIntBiFunction", Interface, None, &[]),
    ("java.util.function.ToIntFunction", Interface, None, &[]),
    ("java.util.function.ToLongBiFunction", Interface, None, &[]),
    ("java.util.function.ToLongFunction", Interface, None, &[]),
    ("java.util.function.UnaryOperator", Interface, None, &["java.util.function.Function"]),
    ("java.util.function.BinaryOperator", Interface, None, &["java.util.function.BiFunction"]),
];
