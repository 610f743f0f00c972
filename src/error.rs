use super::*;

#[derive(Debug, Fail)]
pub enum Error {
    /// An import was requested after a local function, table, memory or global
    /// was declared.
    #[fail(display = "cannot import {}.{}: the {} index space is frozen", module, field, space)]
    FrozenIndexSpace {
        space: IndexSpace,
        module: String,
        field: String,
    },
    /// The function section and the code section no longer line up.
    #[fail(display = "{} function entries do not match {} code bodies", functions, bodies)]
    MisalignedFunctionBody {
        functions: usize,
        bodies: usize,
    },
    /// The immediates handed to `Code::instruction` do not match the
    /// instruction's table entry.
    #[fail(display = "{}: immediate {} should be {}, got {}", instruction, position, expected, found)]
    UnsupportedImmediate {
        instruction: &'static str,
        position: usize,
        expected: ImmediateSlot,
        found: ImmediateSlot,
    },
    #[fail(display = "io error: {}", _0)]
    Io(#[cause] io::Error),
}

/// One immediate position of an instruction. `None` marks a missing or
/// surplus immediate.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ImmediateSlot(pub Option<ImmediateKind>);

impl fmt::Display for ImmediateSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(kind) => write!(f, "{}", kind),
            None => write!(f, "nothing"),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Error {
        Error::Io(e)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages() {
        let err = Error::FrozenIndexSpace {
            space: IndexSpace::Func,
            module: "env".to_owned(),
            field: "print".to_owned(),
        };
        assert_eq!(err.to_string(), "cannot import env.print: the function index space is frozen");

        let err = Error::UnsupportedImmediate {
            instruction: "i32.load",
            position: 0,
            expected: ImmediateSlot(Some(ImmediateKind::MemArg)),
            found: ImmediateSlot(Some(ImmediateKind::I32)),
        };
        assert_eq!(err.to_string(), "i32.load: immediate 0 should be memarg, got i32");

        let err = Error::UnsupportedImmediate {
            instruction: "i32.add",
            position: 0,
            expected: ImmediateSlot(None),
            found: ImmediateSlot(Some(ImmediateKind::I32)),
        };
        assert_eq!(err.to_string(), "i32.add: immediate 0 should be nothing, got i32");

        let err = Error::MisalignedFunctionBody { functions: 2, bodies: 1 };
        assert_eq!(err.to_string(), "2 function entries do not match 1 code bodies");
    }
}
