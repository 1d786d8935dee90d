/*!
# `END`

## Purpose
Stop running the program.

## Remarks
The program also stops when it runs past its last line.
Nothing after `END` on the same line runs.

## Example
```text
10 PRINT "HELLO"
20 END
30 PRINT "THIS DOES NOT PRINT"
HELLO
```

*/
