/// Background text shown under the page title, in Markdown.
pub const NARRATIVE: &str = r#"
[Center for American Progress](https://americanprogress.org/article/quick-facts-gender-wage-gap/)

The Center for American Progress seeks to explain the gender wage gap by breaking down the wage gap into four major factors:
- Women dominate lower paid industries
- Differences in years of experience (women are first to leave the workforce for family care duties)
- Difference in hours worked (again, family care responsibilities)
- Illegal discrimination

Generally because of these factors, women earn 82 cents for ever dollar earned by a man. This gap is much larger when comparing ethnic and racial groups other than white women to white men. The solutions the Center for American Progress recommends are to further combat illegal discrimination and strengthen support for family care responsibilities as a society.

[AAUW](https://www.aauw.org/resources/research/simple-truth/)

The AAUW states that women earn 83 cents for every dollar a man earns. This site emphasises that this wage gap follows women throughout their lives, resulting in lower social security benefits and pensions. Women only have 70% of what men hold in retirement.

**GSS**

The General Social Survey is a long-term, nationally representative survey conducted to explain changes in thinking ("opinions, attitudes and behaviors") over the populations that make up the adults of the United States. Data collection began in 1972 and questions have been modernized to allow tracking of the same trends since the begining. Topics range from religion, racism, sexism and other topics. Demographic information is also captured to enable easy segmentation of the population and analysis of change in attitudes between groups.
"#;
