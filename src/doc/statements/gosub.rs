/*!
# `GOSUB <expression>`

## Purpose
Remember where the program is and move execution to the line numbered
by the expression.

## Remarks
`RETURN` continues execution right after the `GOSUB`.
Up to 32 `GOSUB`s may be waiting for their `RETURN` at once.
A line number that doesn't exist is an error.

## Example
```text
10 GOSUB 100
20 PRINT "WORLD"
90 END
100 PRINT "HELLO ";
110 RETURN
HELLO WORLD
```

*/
