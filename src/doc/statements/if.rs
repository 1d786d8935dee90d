/*!
# `IF <expression> <relation> <expression> [THEN] <statement>`

## Purpose
Run a statement only when a comparison is true.

## Remarks
The relation is one of `=`, `<>`, `<`, `<=`, `>` or `>=`.
When the comparison is false the rest of the line is skipped,
including statements after a colon.
The word `THEN` is optional.

## Example
```text
10 A=10
20 IF A<30 THEN PRINT A:A=A+10:GOTO 20
90 END
10
20
```

*/
