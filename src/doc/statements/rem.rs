/*!
# `REM <anything>`

## Purpose
Add remarks to a program.

## Remarks
Everything after `REM` to the end of the line is ignored,
including colons.

## Example
```text
10 REM THIS IS A REMARK
```

*/
