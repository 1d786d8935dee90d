/*!
# `INPUT <variable>[,<variable>...]`

## Purpose
Suspends execution and awaits a response from the terminal.

## Remarks
A `?` is printed when a new line of input is needed. Separate several
values with commas. Values left over on the line are used by the next
`INPUT`.

Each value may be a number, an expression such as `2*(3+4)`, or a
single letter. A letter stands for its place in the alphabet, so `Y`
is 25. This makes yes and no questions easy to test.

## Example
```text
10 PRINT "CONTINUE";
20 INPUT A
30 IF A = 25 THEN GOTO 10
```

*/
