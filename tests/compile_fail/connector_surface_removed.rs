use trivalent::{Truth, Unknown, and3, not3, or3};

fn main() {
    let _ = Unknown.and3(false);
    let _ = Unknown.or3(Unknown);
    let _ = Unknown.not3();
    let _ = and3(true, Unknown);
    let _ = or3(Unknown, false);
    let _ = not3(Unknown);
    let _ = Truth::Unknown.is_unknown();
    let _ = Truth::True.known();
    let _ = bool::from(Unknown);
    let _ = Unknown < true;
}
