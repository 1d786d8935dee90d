/*!
# `RETURN`

## Purpose
Continue execution after the most recent `GOSUB`.

## Remarks
A `RETURN` without a waiting `GOSUB` is an error.

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
