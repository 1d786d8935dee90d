use super::*;
use crate::mach::GOSUB_DEPTH;

fn nested(depth: usize) -> String {
    let mut program = String::from("10 A=0\n20 GOSUB 100\n30 PRINT A\n40 END\n");
    program.push_str("100 A=A+1\n");
    program.push_str(&format!("110 IF A<{} THEN GOSUB 100\n", depth));
    program.push_str("120 RETURN\n");
    program
}

#[test]
fn test_nesting_to_capacity() {
    let mut r = Runtime::new(&nested(GOSUB_DEPTH));
    assert_eq!(run(&mut r), "32\n");
    assert_eq!(r.depth(), 0);
    assert!(r.is_stopped());
}

#[test]
fn test_one_past_capacity() {
    let mut r = Runtime::new(&nested(GOSUB_DEPTH + 1));
    assert_eq!(run(&mut r), "188: MEMORY OVERFLOW: TOO MANY GOSUB'S IN 110\n");
    assert_eq!(r.depth(), GOSUB_DEPTH);
}

#[test]
fn test_return_resumes_after_argument() {
    let mut r = Runtime::new("10 GOSUB 100:PRINT 2\n20 END\n100 PRINT 1\n110 RETURN\n");
    assert_eq!(run(&mut r), "1\n2\n");
}
