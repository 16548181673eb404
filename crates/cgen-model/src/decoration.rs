//! Declarator decoration: pointers, array dimensions and qualifiers.
//!
//! Decoration belongs to a single declarator site. Two declarations using the
//! same tagged type carry independent `Decoration` values, which is why every
//! variant owns one by value and copies it on `clone_value()`.

use std::fmt::Write;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Decoration {
    pointers: u8,
    /// Fixed dimensions in declarator order, already formatted (`[2][3]`).
    arrays: String,
    var_arrays: u32,
    is_const: bool,
}

impl Decoration {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn pointers(&self) -> u8 {
        self.pointers
    }

    #[inline]
    pub fn set_pointers(&mut self, n: u8) {
        self.pointers = n;
    }

    #[inline]
    pub fn arrays(&self) -> &str {
        &self.arrays
    }

    #[inline]
    pub fn var_arrays(&self) -> u32 {
        self.var_arrays
    }

    #[inline]
    pub fn is_const(&self) -> bool {
        self.is_const
    }

    #[inline]
    pub fn set_const(&mut self, value: bool) {
        self.is_const = value;
    }

    /// Record one array dimension.
    ///
    /// A positive size appends `[size]` after the existing dimensions, so
    /// `int x[2][3]` walked left to right yields `[2][3]`. Size zero stands
    /// for an incomplete `[]` dimension and only bumps the variable counter.
    pub fn append_array(&mut self, size: u64) {
        if size > 0 {
            // Writing into a String cannot fail.
            let _ = write!(self.arrays, "[{size}]");
            return;
        }
        self.var_arrays += 1;
    }

    /// Whether any pointer or array decoration is attached.
    pub fn is_bare(&self) -> bool {
        self.pointers == 0 && self.arrays.is_empty() && self.var_arrays == 0
    }

    /// Prefix written before the base type (`const `).
    pub fn qualifier_prefix(&self) -> &'static str {
        if self.is_const { "const " } else { "" }
    }

    /// Append pointer stars and the fixed array suffix to `out`.
    pub fn write_suffix(&self, out: &mut String) {
        out.extend(std::iter::repeat_n('*', self.pointers as usize));
        out.push_str(&self.arrays);
    }
}
