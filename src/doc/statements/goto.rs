/*!
# `GOTO <expression>`

## Purpose
Move execution to the line numbered by the expression.

## Remarks
The expression is evaluated, so computed jumps like `GOTO 100*N` work.
The line must exist.

## Example
```text
10 PRINT "FOREVER"
20 GOTO 10
```

*/
