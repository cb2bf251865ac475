//! Algebraic type representation for style expressions.
//!
//! A [`Ty`] is either a primitive, a generic placeholder ([`Ty::TypeName`]) scoped to one
//! lambda signature, or a compound built from those. [`Ty::Variant`] is the one case that
//! needs identity rather than structural equality: the recursive `Value` type (see
//! [`value_type`]) refers to itself, so two *separately constructed* variants with equal
//! members are not required to compare equal — only the same constructed node is equal to
//! itself. See [`Variant::new_recursive`] for how the cycle is built.
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Bound on an [`Ty::NArgs`] repeat group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgCount {
    Finite(usize),
    Unbounded,
}

impl ArgCount {
    fn min(self, other: usize) -> usize {
        match self {
            ArgCount::Finite(n) => n.min(other),
            ArgCount::Unbounded => other,
        }
    }
}

struct VariantData {
    /// Stable display name for named variants (e.g. "Value"). Anonymous variants (ad hoc
    /// unions built at a call site) leave this `None` and print their members instead.
    label: Option<&'static str>,
    members: RefCell<Vec<Ty>>,
}

/// A disjoint-union type node. Cloning shares the underlying node (`Rc`), so equality is
/// pointer identity, matching the invariant in the module doc comment.
#[derive(Clone)]
pub struct Variant(Rc<VariantData>);

impl Variant {
    /// Build a (possibly self-referential) variant. `build` receives a handle to the
    /// variant being constructed so a member can close over it before the member list is
    /// finalized — the only way to express `Value = ... | Vector<Value>` in a
    /// single-assignment type system.
    pub fn new_recursive(label: Option<&'static str>, build: impl FnOnce(&Variant) -> Vec<Ty>) -> Variant {
        let v = Variant(Rc::new(VariantData {
            label,
            members: RefCell::new(Vec::new()),
        }));
        let members = build(&v);
        *v.0.members.borrow_mut() = members;
        v
    }

    pub fn new(label: Option<&'static str>, members: Vec<Ty>) -> Variant {
        Variant(Rc::new(VariantData {
            label,
            members: RefCell::new(members),
        }))
    }

    pub fn members(&self) -> Vec<Ty> {
        self.0.members.borrow().clone()
    }

    fn ptr(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.label {
            Some(l) => write!(f, "Variant({l})"),
            None => write!(f, "Variant(@{:p})", self.ptr()),
        }
    }
}

/// A Type.
#[derive(Debug, Clone, PartialEq)]
pub enum Ty {
    Null,
    Number,
    String,
    Boolean,
    Color,
    Object,
    InterpolationType,
    /// A generic placeholder scoped to the enclosing lambda signature.
    TypeName(String),
    Variant(Variant),
    Vector(Box<Ty>),
    Array(Box<Ty>, usize),
    /// Matches any `Array` regardless of length; only valid in parameter position.
    AnyArray(Box<Ty>),
    /// Parameter-list macro; only valid inside `Lambda::params`. Never appears in a
    /// resolved `type.result` and never participates in `match_ty`.
    NArgs(Vec<Ty>, ArgCount),
    /// `Lambda(result, params)`.
    Lambda(Box<Ty>, Vec<Ty>),
}

impl Ty {
    pub fn lambda(result: Ty, params: Vec<Ty>) -> Ty {
        Ty::Lambda(Box::new(result), params)
    }

    pub fn as_lambda(&self) -> Option<(&Ty, &[Ty])> {
        match self {
            Ty::Lambda(result, params) => Some((result.as_ref(), params.as_slice())),
            _ => None,
        }
    }

    /// The type a value of this type evaluates to: a bare type is itself; a lambda
    /// evaluates to its declared result (used when an argument in call position is itself
    /// a lambda-typed sub-call — see [`crate::check::match_ty`]).
    pub fn result_type(&self) -> &Ty {
        match self {
            Ty::Lambda(result, _) => result,
            other => other,
        }
    }
}

/// The recursive `Value` type: `Null | Number | String | Boolean | Color | Object |
/// Vector<Value>`.
pub fn value_type() -> Ty {
    Ty::Variant(Variant::new_recursive(Some("Value"), |this| {
        vec![
            Ty::Null,
            Ty::Number,
            Ty::String,
            Ty::Boolean,
            Ty::Color,
            Ty::Object,
            Ty::Vector(Box::new(Ty::Variant(this.clone()))),
        ]
    }))
}

/// Human-readable, stable name. Used in error messages and to print inferred result types.
///
/// Recursion through a self-referential [`Variant`] terminates via an identity-visited
/// stack: a variant seen again while printing its own members prints as `"..."`.
pub fn name(ty: &Ty) -> String {
    let mut visited = Vec::new();
    name_inner(ty, &mut visited)
}

fn name_inner(ty: &Ty, visited: &mut Vec<*const ()>) -> String {
    match ty {
        Ty::Null => "null".to_string(),
        Ty::Number => "number".to_string(),
        Ty::String => "string".to_string(),
        Ty::Boolean => "boolean".to_string(),
        Ty::Color => "color".to_string(),
        Ty::Object => "object".to_string(),
        Ty::InterpolationType => "interpolation_type".to_string(),
        Ty::TypeName(n) => n.clone(),
        Ty::Variant(v) => {
            if let Some(label) = v.0.label {
                return label.to_string();
            }
            let ptr = v.ptr();
            if visited.contains(&ptr) {
                return "...".to_string();
            }
            visited.push(ptr);
            let parts: Vec<String> = v
                .members()
                .iter()
                .map(|m| name_inner(m, visited))
                .collect();
            visited.pop();
            parts.join(" | ")
        }
        Ty::Vector(inner) => format!("Vector<{}>", name_inner(inner, visited)),
        Ty::Array(inner, n) => format!("Array<{}, {}>", name_inner(inner, visited), n),
        Ty::AnyArray(inner) => format!("Array<{}>", name_inner(inner, visited)),
        Ty::NArgs(..) => "<nargs>".to_string(),
        Ty::Lambda(result, params) => {
            let p: Vec<String> = params.iter().map(|t| name_inner(t, visited)).collect();
            format!("({}) => {}", p.join(", "), name_inner(result, visited))
        }
    }
}

/// True iff `ty` mentions a [`Ty::TypeName`] anywhere reachable, including through a
/// self-referential [`Variant`] (guarded by an identity-visited stack so recursive
/// variants like `Value` terminate — and, since `Value` contains no typenames, return
/// `false` rather than looping).
pub fn is_generic(ty: &Ty) -> bool {
    let mut visited = Vec::new();
    is_generic_inner(ty, &mut visited)
}

fn is_generic_inner(ty: &Ty, visited: &mut Vec<*const ()>) -> bool {
    match ty {
        Ty::Null
        | Ty::Number
        | Ty::String
        | Ty::Boolean
        | Ty::Color
        | Ty::Object
        | Ty::InterpolationType => false,
        Ty::TypeName(_) => true,
        Ty::Variant(v) => {
            let ptr = v.ptr();
            if visited.contains(&ptr) {
                return false;
            }
            visited.push(ptr);
            let result = v.members().iter().any(|m| is_generic_inner(m, visited));
            visited.pop();
            result
        }
        Ty::Vector(inner) | Ty::AnyArray(inner) => is_generic_inner(inner, visited),
        Ty::Array(inner, _) => is_generic_inner(inner, visited),
        Ty::NArgs(types, _) => types.iter().any(|t| is_generic_inner(t, visited)),
        Ty::Lambda(result, params) => {
            is_generic_inner(result, visited) || params.iter().any(|p| is_generic_inner(p, visited))
        }
    }
}

/// Substitute every [`Ty::TypeName`] bound in `bindings`, recursing into compound types.
/// A concrete (non-generic) compound is returned unchanged (cloned, not rebuilt) so a
/// self-referential [`Variant`] like `Value` — which contains no typenames — is returned
/// as the same node rather than walked.
pub fn resolve(ty: &Ty, bindings: &HashMap<String, Ty>) -> Ty {
    if !is_generic(ty) {
        return ty.clone();
    }
    let mut visited = Vec::new();
    resolve_inner(ty, bindings, &mut visited)
}

fn resolve_inner(ty: &Ty, bindings: &HashMap<String, Ty>, visited: &mut Vec<*const ()>) -> Ty {
    match ty {
        Ty::TypeName(n) => bindings.get(n).cloned().unwrap_or_else(|| ty.clone()),
        Ty::Variant(v) => {
            let ptr = v.ptr();
            if visited.contains(&ptr) {
                return ty.clone();
            }
            visited.push(ptr);
            let members = v
                .members()
                .iter()
                .map(|m| resolve_inner(m, bindings, visited))
                .collect();
            visited.pop();
            Ty::Variant(Variant::new(v.0.label, members))
        }
        Ty::Vector(inner) => Ty::Vector(Box::new(resolve_inner(inner, bindings, visited))),
        Ty::AnyArray(inner) => Ty::AnyArray(Box::new(resolve_inner(inner, bindings, visited))),
        Ty::Array(inner, n) => Ty::Array(Box::new(resolve_inner(inner, bindings, visited)), *n),
        Ty::NArgs(types, n) => Ty::NArgs(
            types.iter().map(|t| resolve_inner(t, bindings, visited)).collect(),
            *n,
        ),
        Ty::Lambda(result, params) => Ty::Lambda(
            Box::new(resolve_inner(result, bindings, visited)),
            params.iter().map(|p| resolve_inner(p, bindings, visited)).collect(),
        ),
        other => other.clone(),
    }
}

/// Expand a declared parameter list (which may contain [`Ty::NArgs`] groups) against a
/// concrete argument count.
///
/// Returns `None` if the expansion cannot match `arg_count` exactly.
pub fn expand_params(params: &[Ty], arg_count: usize) -> Option<Vec<Ty>> {
    let fixed_len = params.iter().filter(|p| !matches!(p, Ty::NArgs(..))).count();
    let mut out = Vec::new();
    for p in params {
        match p {
            Ty::NArgs(types, n) => {
                if types.is_empty() {
                    continue;
                }
                let remaining = arg_count.saturating_sub(fixed_len);
                let repeat = n.min(remaining.div_ceil(types.len()));
                for _ in 0..repeat {
                    out.extend(types.iter().cloned());
                }
            }
            other => out.push(other.clone()),
        }
    }
    if out.len() == arg_count { Some(out) } else { None }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", name(self))
    }
}
