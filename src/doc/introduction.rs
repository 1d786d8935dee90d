/*!
# Introductory Tutorial for Tiny BASIC

Tiny BASIC runs a program stored in a text file. Every line starts with a
line number and holds a statement. Lines run in the order they appear in
the file, lowest number first, until an `END` statement.

```text
10 PRINT "WHAT IS YOUR AGE";
20 INPUT A
30 IF A < 18 THEN GOTO 60
40 PRINT "WELCOME"
50 END
60 PRINT "COME BACK IN "; 18 - A; " YEARS"
70 END
```

Save that as `age.bas` and run it with `tinybasic age.bas`.
The `?` is the `INPUT` prompt. Type a number and press ENTER.

<pre><code>&nbsp;  WHAT IS YOUR AGE?12
&nbsp;  COME BACK IN 6 YEARS
</code></pre>

Stop a running program with CTRL-C.

## Numbers and variables
There are 26 variables named `A` through `Z`. Each one holds a whole number
from -32768 to 32767 and starts at zero. Arithmetic that goes past either
end wraps around to the other, so `32767+1` is `-32768`.

Expressions use `+`, `-`, `*`, `/` and parentheses. Multiplication and
division happen before addition and subtraction. Division throws away the
remainder. `RND(X)` gives a random number from 0 up to but not including X.

## Spaces
Keywords may contain spaces. `G O T O 100` is the same as `GOTO 100`.

## Several statements on a line
A colon separates statements on the same line.

```text
10 A = 1 : B = 2 : PRINT A + B
```

## Line numbers
Line numbers must go up from the top of the file to the bottom and the
number 0 can't be used. `GOTO` and `GOSUB` find their line by reading from
the top of the program every time.

*/
