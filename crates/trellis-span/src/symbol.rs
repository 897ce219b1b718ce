/// Interned identifier-like text.
///
/// Two symbols created from equal text in the same database are the same
/// symbol, so comparing symbols never looks at their text.
#[salsa::interned(debug)]
pub struct Symbol<'db> {
    #[returns(deref)]
    pub text: Box<str>,
}

impl<'db> Symbol<'db> {
    /// Length of the interned text in bytes.
    pub fn len(self, db: &'db dyn salsa::Database) -> usize {
        self.text(db).len()
    }

    pub fn is_empty(self, db: &'db dyn salsa::Database) -> bool {
        self.text(db).is_empty()
    }
}

pub trait IntoSymbol<'db> {
    fn into_symbol(self, db: &'db dyn salsa::Database) -> Symbol<'db>;
}

impl<'db> IntoSymbol<'db> for Symbol<'db> {
    fn into_symbol(self, _db: &'db dyn salsa::Database) -> Symbol<'db> {
        self
    }
}

impl<'db> IntoSymbol<'db> for &str {
    fn into_symbol(self, db: &'db dyn salsa::Database) -> Symbol<'db> {
        Symbol::new(db, self)
    }
}

impl<'db> IntoSymbol<'db> for String {
    fn into_symbol(self, db: &'db dyn salsa::Database) -> Symbol<'db> {
        Symbol::new(db, self.as_str())
    }
}
