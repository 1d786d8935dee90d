/*!
# `[LET] <variable> = <expression>`

## Purpose
Assigns the value of an expression to a variable.

## Remarks
The word `LET` is optional.

## Example
```text
LET A = 2
B = A * 3
```

*/
