/*!
# `PRINT [<list of expressions and strings>]`
Also `PR`.

## Purpose
Output information to the terminal for the operator.

## Remarks
A `PRINT` by itself outputs a newline.
A semicolon (;) places the next item right after the last one.
A comma advances to the next column that is a multiple of 8.
Ending the statement with either one suppresses the newline.

## Example
```text
PRINT "A",5
A       5
PRINT "X=";3;
X=3
```

*/
