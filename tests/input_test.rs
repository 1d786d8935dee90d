mod common;
use common::*;
use tinybasic::mach::Runtime;

#[test]
fn test_input_prompt_and_echo() {
    let mut r = Runtime::new("10 PRINT \"AGE\";\n20 INPUT A\n30 PRINT A*2\n40 END\n");
    assert_eq!(exec(&mut r), "AGE?");
    assert!(r.enter("21"));
    assert_eq!(exec(&mut r), "42\n");
    assert!(r.is_stopped());
}

#[test]
fn test_input_several_values() {
    let mut r = Runtime::new("10 INPUT A,B\n20 PRINT A+B\n30 END\n");
    assert_eq!(exec(&mut r), "?");
    assert!(r.enter("3, 4"));
    assert_eq!(exec(&mut r), "7\n");
}

#[test]
fn test_input_across_lines() {
    let mut r = Runtime::new("10 INPUT A,B\n20 PRINT A;B\n30 END\n");
    assert_eq!(exec(&mut r), "?");
    assert!(r.enter("5"));
    assert_eq!(exec(&mut r), "?");
    assert!(r.enter("6"));
    assert_eq!(exec(&mut r), "56\n");
}

#[test]
fn test_input_negative_and_expression() {
    let mut r = Runtime::new("10 INPUT A,B\n20 PRINT A;\" \";B\n30 END\n");
    exec(&mut r);
    assert!(r.enter("-8,2*3"));
    assert_eq!(exec(&mut r), "-8 6\n");
}

#[test]
fn test_input_expects_variable() {
    assert_eq!(
        run("10 INPUT 5\n20 END\n"),
        "104: INPUT SYNTAX BAD - EXPECTS VARIABLE NAME IN 10\n"
    );
}

#[test]
fn test_input_expects_comma() {
    let mut r = Runtime::new("10 INPUT A B\n20 END\n");
    assert_eq!(exec(&mut r), "?");
    assert!(r.enter("1 2"));
    assert_eq!(
        exec(&mut r),
        "123: INPUT SYNTAX BAD - EXPECTS COMMA IN 10\n"
    );
}
