/*!
# Errors

Any error stops the program. The message names the error and the line
it happened in. The process exits with the error number, or the error
number less 256 when it is larger than 255.

| Number | Message |
|-------:|---------|
| 8   | CANNOT LOAD SOURCE |
| 9   | LINE NUMBER 0 NOT ALLOWED |
| 18  | LET IS MISSING A VARIABLE NAME |
| 20  | LET IS MISSING AN = |
| 37  | NO LINE TO GO TO |
| 46  | GOSUB SUBROUTINE DOES NOT EXIST |
| 104 | INPUT SYNTAX BAD - EXPECTS VARIABLE NAME |
| 123 | INPUT SYNTAX BAD - EXPECTS COMMA |
| 130 | BREAK |
| 133 | RETURN HAS NO MATCHING GOSUB |
| 154 | CAN'T LIST LINE NUMBER 0 |
| 188 | MEMORY OVERFLOW: TOO MANY GOSUB'S |
| 259 | RND (0) NOT ALLOWED |
| 303 | USR NOT SUPPORTED |
| 330 | IF SYNTAX ERROR - EXPECTS RELATION OPERATOR |

Dividing by zero is not an error. The result is 0.

*/
