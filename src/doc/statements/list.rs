/*!
# `LIST [<from line number>[,<to line number>]]`

## Purpose
Show the program text.

## Remarks
With no line numbers the whole program is shown exactly as it was loaded.
With one, only that line. With two, every line from the first number
through the second.

## Example
```text
LIST          ' Everything.
LIST 120      ' Only line 120.
LIST 500,600  ' Lines 500 to 600 inclusive.
```

*/
